//! Terminal rendering of the popover with ratatui.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::highlight::Segment;
use crate::popover::{PopoverView, ProductView};

/// Styles applied to the parts of the popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverStyle {
	pub header: Style,
	pub suggestion: Style,
	pub highlight: Style,
	pub price: Style,
	pub discount: Style,
	pub muted: Style,
}

impl Default for PopoverStyle {
	fn default() -> Self {
		Self {
			header: Style::default().add_modifier(Modifier::BOLD),
			suggestion: Style::default().fg(Color::Cyan),
			highlight: Style::default()
				.fg(Color::Yellow)
				.add_modifier(Modifier::BOLD),
			price: Style::default().fg(Color::Green),
			discount: Style::default()
				.fg(Color::DarkGray)
				.add_modifier(Modifier::CROSSED_OUT),
			muted: Style::default().fg(Color::DarkGray),
		}
	}
}

/// Lay the popover out as styled lines.
#[must_use]
pub fn popover_lines(view: &PopoverView, style: &PopoverStyle) -> Vec<Line<'static>> {
	let mut lines = Vec::new();

	if !view.suggestions.is_empty() {
		lines.push(Line::styled(view.labels.suggestions.clone(), style.header));
		for suggestion in &view.suggestions {
			lines.push(Line::from(vec![
				Span::raw("  "),
				Span::styled(suggestion.text.clone(), style.suggestion),
			]));
		}
		lines.push(Line::default());
	}

	lines.push(Line::styled(view.labels.products.clone(), style.header));
	for product in &view.products {
		lines.push(name_line(&product.segments, style));
		lines.push(price_line(product, &view.labels.unit_price, style));
	}

	lines.push(Line::default());
	lines.push(Line::styled(view.footer.text(), style.muted));
	lines
}

/// Build the product name line, styling matched segments.
fn name_line(segments: &[Segment], style: &PopoverStyle) -> Line<'static> {
	let spans: Vec<Span<'static>> = segments
		.iter()
		.filter(|segment| !segment.text.is_empty())
		.map(|segment| {
			if segment.matched {
				Span::styled(segment.text.clone(), style.highlight)
			} else {
				Span::raw(segment.text.clone())
			}
		})
		.collect();
	Line::from(spans)
}

fn price_line(product: &ProductView, unit_label: &str, style: &PopoverStyle) -> Line<'static> {
	let mut spans = vec![Span::raw("  ")];
	if let Some(price) = &product.price {
		spans.push(Span::styled(price.price_text.clone(), style.price));
		if let Some(discount) = &price.discount_text {
			spans.push(Span::raw(" "));
			spans.push(Span::styled(discount.clone(), style.discount));
		}
		spans.push(Span::raw("  "));
	}
	spans.push(Span::styled(unit_label.to_string(), style.muted));
	Line::from(spans)
}

/// Widget drawing a [`PopoverView`] inside a bordered block.
pub struct PopoverWidget<'a> {
	view: &'a PopoverView,
	style: PopoverStyle,
}

impl<'a> PopoverWidget<'a> {
	#[must_use]
	pub fn new(view: &'a PopoverView) -> Self {
		Self {
			view,
			style: PopoverStyle::default(),
		}
	}

	#[must_use]
	pub fn style(mut self, style: PopoverStyle) -> Self {
		self.style = style;
		self
	}

	/// Rows needed to draw the popover without clipping.
	#[must_use]
	pub fn height(&self) -> u16 {
		let lines = popover_lines(self.view, &self.style).len() + 2;
		u16::try_from(lines).unwrap_or(u16::MAX)
	}
}

impl Widget for PopoverWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let title = format!(" {} ", self.view.query);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.style.muted)
			.title(title);
		Paragraph::new(Text::from(popover_lines(self.view, &self.style)))
			.block(block)
			.render(area, buf);
	}
}

/// Draw the popover into an off-screen buffer `width` columns wide and return
/// its rows as plain text.
#[must_use]
pub fn render_plain(view: &PopoverView, width: u16) -> String {
	let widget = PopoverWidget::new(view);
	let area = Rect::new(0, 0, width.max(4), widget.height());
	let mut buf = Buffer::empty(area);
	widget.render(area, &mut buf);
	buffer_to_string(&buf)
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		let mut x = 0;
		while x < buf.area.width {
			let symbol = buf[(x, y)].symbol();
			line.push_str(symbol);
			// Wide graphemes occupy the following cells as well.
			let width = u16::try_from(symbol.width()).unwrap_or(1).max(1);
			x = x.saturating_add(width);
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}
