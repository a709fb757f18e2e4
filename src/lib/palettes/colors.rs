use std::sync::LazyLock;

use regex::Regex;

use crate::palettes::error::{PaletteError, Result};

/// Turns a color name or color string into an RGB triple.
pub trait ColorResolver {
	fn resolve(&self, color: &str) -> Result<[u8; 3]>;
}

/// Resolves CSS-style color strings.
///
/// Accepted forms are `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (alpha is ignored),
/// `rgb(r, g, b)`, `rgb(r%, g%, b%)`, `hsl(h, s%, l%)`, `hsv(h, s%, v%)` (or `hsb`)
/// and the CSS color names, all case-insensitive.
#[derive(Clone, Copy, Debug, Default)]
pub struct CssColorResolver;

impl ColorResolver for CssColorResolver {
	fn resolve(&self, color: &str) -> Result<[u8; 3]> {
		getrgb(color)
	}
}

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^rgb\(\s*(?P<r>\d+)\s*,\s*(?P<g>\d+)\s*,\s*(?P<b>\d+)\s*\)$").unwrap()
});
static RGB_PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^rgb\(\s*(?P<r>\d+\.?\d*)%\s*,\s*(?P<g>\d+\.?\d*)%\s*,\s*(?P<b>\d+\.?\d*)%\s*\)$").unwrap()
});
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^hsl\(\s*(?P<h>\d+\.?\d*)\s*,\s*(?P<s>\d+\.?\d*)%\s*,\s*(?P<l>\d+\.?\d*)%\s*\)$").unwrap()
});
static HSV_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^hs[bv]\(\s*(?P<h>\d+\.?\d*)\s*,\s*(?P<s>\d+\.?\d*)%\s*,\s*(?P<v>\d+\.?\d*)%\s*\)$").unwrap()
});

/// Resolves `color` with the [CssColorResolver] rules.
pub fn getrgb(color: &str) -> Result<[u8; 3]> {
	let unknown = || PaletteError::UnknownColor(color.to_string());
	let lower = color.trim().to_ascii_lowercase();

	if let Some(hex) = lower.strip_prefix('#') {
		return parse_hex(hex).ok_or_else(unknown);
	}

	if let Ok(i) = NAMED_COLORS.binary_search_by(|(name, _)| name.cmp(&lower.as_str())) {
		let v = NAMED_COLORS[i].1;
		return Ok([(v >> 16) as u8, (v >> 8) as u8, v as u8]);
	}

	if let Some(caps) = RGB_RE.captures(&lower) {
		let channel = |name: &str| caps[name].parse::<u8>().map_err(|_| unknown());
		return Ok([channel("r")?, channel("g")?, channel("b")?]);
	}

	if let Some(caps) = RGB_PERCENT_RE.captures(&lower) {
		let channel = |name: &str| caps[name].parse::<f64>().map(percent_to_u8).map_err(|_| unknown());
		return Ok([channel("r")?, channel("g")?, channel("b")?]);
	}

	if let Some(caps) = HSL_RE.captures(&lower) {
		let value = |name: &str| caps[name].parse::<f64>().map_err(|_| unknown());
		let (r, g, b) = hls_to_rgb(value("h")? / 360.0, value("l")? / 100.0, value("s")? / 100.0);
		return Ok([unit_to_u8(r), unit_to_u8(g), unit_to_u8(b)]);
	}

	if let Some(caps) = HSV_RE.captures(&lower) {
		let value = |name: &str| caps[name].parse::<f64>().map_err(|_| unknown());
		let (r, g, b) = hsv_to_rgb(value("h")? / 360.0, value("s")? / 100.0, value("v")? / 100.0);
		return Ok([unit_to_u8(r), unit_to_u8(g), unit_to_u8(b)]);
	}

	Err(unknown())
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
	if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
		return None;
	}

	let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
	let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

	match hex.len() {
		3 | 4 => Some([nibble(0)?, nibble(1)?, nibble(2)?]),
		6 | 8 => Some([byte(0)?, byte(2)?, byte(4)?]),
		_ => None,
	}
}

fn percent_to_u8(p: f64) -> u8 {
	(p * 255.0 / 100.0 + 0.5).floor() as u8
}

fn unit_to_u8(v: f64) -> u8 {
	(v * 255.0 + 0.5).floor() as u8
}

fn hue_value(m1: f64, m2: f64, hue: f64) -> f64 {
	let hue = hue.rem_euclid(1.0);
	if hue < 1.0 / 6.0 {
		m1 + (m2 - m1) * hue * 6.0
	} else if hue < 0.5 {
		m2
	} else if hue < 2.0 / 3.0 {
		m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
	} else {
		m1
	}
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
	if s == 0.0 {
		return (l, l, l);
	}

	let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
	let m1 = 2.0 * l - m2;
	(hue_value(m1, m2, h + 1.0 / 3.0), hue_value(m1, m2, h), hue_value(m1, m2, h - 1.0 / 3.0))
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
	if s == 0.0 {
		return (v, v, v);
	}

	let i = (h * 6.0).floor();
	let f = h * 6.0 - i;
	let p = v * (1.0 - s);
	let q = v * (1.0 - s * f);
	let t = v * (1.0 - s * (1.0 - f));

	match (i as i64).rem_euclid(6) {
		0 => (v, t, p),
		1 => (q, v, p),
		2 => (p, v, t),
		3 => (p, q, v),
		4 => (t, p, v),
		_ => (v, p, q),
	}
}

// sorted by name for binary search
const NAMED_COLORS: &[(&str, u32)] = &[
	("aliceblue", 0xF0F8FF),
	("antiquewhite", 0xFAEBD7),
	("aqua", 0x00FFFF),
	("aquamarine", 0x7FFFD4),
	("azure", 0xF0FFFF),
	("beige", 0xF5F5DC),
	("bisque", 0xFFE4C4),
	("black", 0x000000),
	("blanchedalmond", 0xFFEBCD),
	("blue", 0x0000FF),
	("blueviolet", 0x8A2BE2),
	("brown", 0xA52A2A),
	("burlywood", 0xDEB887),
	("cadetblue", 0x5F9EA0),
	("chartreuse", 0x7FFF00),
	("chocolate", 0xD2691E),
	("coral", 0xFF7F50),
	("cornflowerblue", 0x6495ED),
	("cornsilk", 0xFFF8DC),
	("crimson", 0xDC143C),
	("cyan", 0x00FFFF),
	("darkblue", 0x00008B),
	("darkcyan", 0x008B8B),
	("darkgoldenrod", 0xB8860B),
	("darkgray", 0xA9A9A9),
	("darkgreen", 0x006400),
	("darkgrey", 0xA9A9A9),
	("darkkhaki", 0xBDB76B),
	("darkmagenta", 0x8B008B),
	("darkolivegreen", 0x556B2F),
	("darkorange", 0xFF8C00),
	("darkorchid", 0x9932CC),
	("darkred", 0x8B0000),
	("darksalmon", 0xE9967A),
	("darkseagreen", 0x8FBC8F),
	("darkslateblue", 0x483D8B),
	("darkslategray", 0x2F4F4F),
	("darkslategrey", 0x2F4F4F),
	("darkturquoise", 0x00CED1),
	("darkviolet", 0x9400D3),
	("deeppink", 0xFF1493),
	("deepskyblue", 0x00BFFF),
	("dimgray", 0x696969),
	("dimgrey", 0x696969),
	("dodgerblue", 0x1E90FF),
	("firebrick", 0xB22222),
	("floralwhite", 0xFFFAF0),
	("forestgreen", 0x228B22),
	("fuchsia", 0xFF00FF),
	("gainsboro", 0xDCDCDC),
	("ghostwhite", 0xF8F8FF),
	("gold", 0xFFD700),
	("goldenrod", 0xDAA520),
	("gray", 0x808080),
	("green", 0x008000),
	("greenyellow", 0xADFF2F),
	("grey", 0x808080),
	("honeydew", 0xF0FFF0),
	("hotpink", 0xFF69B4),
	("indianred", 0xCD5C5C),
	("indigo", 0x4B0082),
	("ivory", 0xFFFFF0),
	("khaki", 0xF0E68C),
	("lavender", 0xE6E6FA),
	("lavenderblush", 0xFFF0F5),
	("lawngreen", 0x7CFC00),
	("lemonchiffon", 0xFFFACD),
	("lightblue", 0xADD8E6),
	("lightcoral", 0xF08080),
	("lightcyan", 0xE0FFFF),
	("lightgoldenrodyellow", 0xFAFAD2),
	("lightgray", 0xD3D3D3),
	("lightgreen", 0x90EE90),
	("lightgrey", 0xD3D3D3),
	("lightpink", 0xFFB6C1),
	("lightsalmon", 0xFFA07A),
	("lightseagreen", 0x20B2AA),
	("lightskyblue", 0x87CEFA),
	("lightslategray", 0x778899),
	("lightslategrey", 0x778899),
	("lightsteelblue", 0xB0C4DE),
	("lightyellow", 0xFFFFE0),
	("lime", 0x00FF00),
	("limegreen", 0x32CD32),
	("linen", 0xFAF0E6),
	("magenta", 0xFF00FF),
	("maroon", 0x800000),
	("mediumaquamarine", 0x66CDAA),
	("mediumblue", 0x0000CD),
	("mediumorchid", 0xBA55D3),
	("mediumpurple", 0x9370DB),
	("mediumseagreen", 0x3CB371),
	("mediumslateblue", 0x7B68EE),
	("mediumspringgreen", 0x00FA9A),
	("mediumturquoise", 0x48D1CC),
	("mediumvioletred", 0xC71585),
	("midnightblue", 0x191970),
	("mintcream", 0xF5FFFA),
	("mistyrose", 0xFFE4E1),
	("moccasin", 0xFFE4B5),
	("navajowhite", 0xFFDEAD),
	("navy", 0x000080),
	("oldlace", 0xFDF5E6),
	("olive", 0x808000),
	("olivedrab", 0x6B8E23),
	("orange", 0xFFA500),
	("orangered", 0xFF4500),
	("orchid", 0xDA70D6),
	("palegoldenrod", 0xEEE8AA),
	("palegreen", 0x98FB98),
	("paleturquoise", 0xAFEEEE),
	("palevioletred", 0xDB7093),
	("papayawhip", 0xFFEFD5),
	("peachpuff", 0xFFDAB9),
	("peru", 0xCD853F),
	("pink", 0xFFC0CB),
	("plum", 0xDDA0DD),
	("powderblue", 0xB0E0E6),
	("purple", 0x800080),
	("rebeccapurple", 0x663399),
	("red", 0xFF0000),
	("rosybrown", 0xBC8F8F),
	("royalblue", 0x4169E1),
	("saddlebrown", 0x8B4513),
	("salmon", 0xFA8072),
	("sandybrown", 0xF4A460),
	("seagreen", 0x2E8B57),
	("seashell", 0xFFF5EE),
	("sienna", 0xA0522D),
	("silver", 0xC0C0C0),
	("skyblue", 0x87CEEB),
	("slateblue", 0x6A5ACD),
	("slategray", 0x708090),
	("slategrey", 0x708090),
	("snow", 0xFFFAFA),
	("springgreen", 0x00FF7F),
	("steelblue", 0x4682B4),
	("tan", 0xD2B48C),
	("teal", 0x008080),
	("thistle", 0xD8BFD8),
	("tomato", 0xFF6347),
	("turquoise", 0x40E0D0),
	("violet", 0xEE82EE),
	("wheat", 0xF5DEB3),
	("white", 0xFFFFFF),
	("whitesmoke", 0xF5F5F5),
	("yellow", 0xFFFF00),
	("yellowgreen", 0x9ACD32),
];
