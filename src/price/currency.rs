/// Look up the display symbol for an ISO 4217 currency code.
///
/// Codes are matched case-insensitively. Unknown codes yield `None`.
pub fn symbol_for(code: &str) -> Option<&'static str> {
	let symbol = match code.to_ascii_uppercase().as_str() {
		"AED" => "د.إ",
		"ARS" => "$",
		"AUD" => "$",
		"BGN" => "лв",
		"BOB" => "$b",
		"BRL" => "R$",
		"CAD" => "$",
		"CHF" => "CHF",
		"CLP" => "$",
		"CNY" => "¥",
		"COP" => "$",
		"CRC" => "₡",
		"CZK" => "Kč",
		"DKK" => "kr",
		"DOP" => "RD$",
		"EGP" => "£",
		"EUR" => "€",
		"GBP" => "£",
		"GEL" => "₾",
		"GTQ" => "Q",
		"HKD" => "$",
		"HNL" => "L",
		"HUF" => "Ft",
		"IDR" => "Rp",
		"ILS" => "₪",
		"INR" => "₹",
		"ISK" => "kr",
		"JPY" => "¥",
		"KRW" => "₩",
		"KZT" => "₸",
		"MXN" => "$",
		"MYR" => "RM",
		"NGN" => "₦",
		"NOK" => "kr",
		"NZD" => "$",
		"PEN" => "S/.",
		"PHP" => "₱",
		"PLN" => "zł",
		"PYG" => "Gs",
		"RON" => "lei",
		"RUB" => "₽",
		"SAR" => "﷼",
		"SEK" => "kr",
		"SGD" => "$",
		"THB" => "฿",
		"TRY" => "₺",
		"TWD" => "NT$",
		"UAH" => "₴",
		"USD" => "$",
		"UYU" => "$U",
		"VND" => "₫",
		"ZAR" => "R",
		_ => return None,
	};
	Some(symbol)
}
