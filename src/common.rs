use colored::Colorize;

const SWATCHES_PER_ROW: usize = 16;

/// Prints palette entries as colored blocks, 16 per row.
/// Entries with fewer than three channels are shown as grey.
pub(crate) fn print_swatches<'a, I: Iterator<Item = &'a [u8]>>(entries: I) {
	let mut row: Vec<String> = Vec::with_capacity(SWATCHES_PER_ROW);
	for entry in entries {
		let (r, g, b) = match entry {
			[r, g, b, ..] => (*r, *g, *b),
			[v, ..] => (*v, *v, *v),
			[] => continue,
		};
		row.push("  ".on_truecolor(r, g, b).to_string());

		if row.len() == SWATCHES_PER_ROW {
			println!("{}", row.join(""));
			row.clear();
		}
	}

	if !row.is_empty() {
		println!("{}", row.join(""));
	}
}
