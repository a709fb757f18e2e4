use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use pal_rs::{FormatError, PaletteError};
use pal_rs::palettes::factories::wedge;
use pal_rs::palettes::loader::{LOAD_ORDER, PaletteFormat, load, load_as, load_from_reader};

const FIRST_COLOR: [u8; 3] = [0x1E, 0x3D, 0x54];
const LAST_COLOR: [u8; 3] = [0xE2, 0xED, 0xF5];

fn test_file(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/palettes").join(name)
}

#[test]
fn palette_detection() {
	for palette_type in LOAD_ORDER {
		let test_file = test_file(&format!("palette.{palette_type}"));

		println!("Testing {} detection…", palette_type.to_string().to_uppercase());

		let pal = load(&test_file).unwrap();
		assert_eq!(pal.format, palette_type);

		match palette_type {
			PaletteFormat::Ggr => {
				assert_eq!(pal.raw_mode, "RGBA");
				assert_eq!(pal.len(), 256);
			}
			PaletteFormat::Gpl | PaletteFormat::Text => {
				// these formats always yield 256 colors
				assert_eq!(pal.raw_mode, "RGB");
				assert_eq!(pal.len(), 256);
				assert_eq!(pal.entries().next().unwrap(), FIRST_COLOR);
				assert_eq!(pal.entries().nth(3).unwrap(), LAST_COLOR);
			}
			_ => {
				assert_eq!(pal.raw_mode, "RGB");
				assert_eq!(pal.len(), 4);
				assert_eq!(pal.entries().next().unwrap(), FIRST_COLOR);
				assert_eq!(pal.entries().last().unwrap(), LAST_COLOR);
			}
		}
	}
}

#[test]
fn palette_parsing_with_known_format() {
	for palette_type in LOAD_ORDER {
		let test_file = test_file(&format!("palette.{palette_type}"));
		let pal = load_as(&test_file, palette_type).unwrap();
		assert_eq!(pal.format, palette_type);
	}
}

#[test]
fn unspecified_entries_stay_grey() {
	let pal = load(test_file("palette.gpl")).unwrap();
	assert_eq!(pal.entries().nth(4).unwrap(), [4, 4, 4]);
	assert_eq!(pal.entries().nth(255).unwrap(), [255, 255, 255]);

	let pal = load(test_file("palette.txt")).unwrap();
	// "4 128" is a grey entry
	assert_eq!(pal.entries().nth(4).unwrap(), [128, 128, 128]);
	assert_eq!(pal.entries().nth(5).unwrap(), [5, 5, 5]);
}

#[test]
fn gradient_sampling() {
	let pal = load(test_file("palette.ggr")).unwrap();
	let entries = pal.entries().collect::<Vec<&[u8]>>();

	assert_eq!(entries[0], [0, 0, 0, 255]);
	assert_eq!(entries[64], [128, 128, 128, 255]);
	assert_eq!(entries[127], [254, 254, 254, 255]);
	assert_eq!(entries[128], [255, 254, 254, 255]);
	assert_eq!(entries[255], [255, 0, 0, 255]);
}

#[test]
fn loaded_palettes_are_raw() {
	let pal = load(test_file("palette.pal")).unwrap().into_palette();
	assert!(pal.is_raw());
	assert!(pal.is_dirty());

	let (mode, data) = pal.get_data();
	assert_eq!(mode, "RGB");
	assert_eq!(&data[..3], FIRST_COLOR);
	assert!(matches!(pal.to_bytes(), Err(PaletteError::RawPalette)));
}

#[test]
fn saved_palettes_load_back() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("wedge.txt");

	let mut pal = wedge("RGB");
	pal.get_color(&[10, 20, 30]).unwrap();
	pal.save_to_file(&path).unwrap();

	let loaded = load(&path).unwrap();
	assert_eq!(loaded.format, PaletteFormat::Text);
	assert_eq!(loaded.entries().next().unwrap(), [10, 20, 30]);

	let unpacked = loaded.to_structured("RGB");
	assert_eq!(unpacked.to_bytes().unwrap(), pal.to_bytes().unwrap());
	assert_eq!(unpacked.color_count(), 0);
}

#[test]
fn loading_from_memory() {
	let contents = fs::read(test_file("palette.json")).unwrap();
	let pal = load_from_reader(&mut Cursor::new(contents)).unwrap().unwrap();
	assert_eq!(pal.format, PaletteFormat::Json);

	assert!(load_from_reader(&mut Cursor::new(Vec::new())).unwrap().is_none());
}

#[test]
fn unknown_files_fail_to_load() {
	let dir = tempfile::tempdir().unwrap();

	let path = dir.path().join("empty.txt");
	fs::write(&path, "").unwrap();
	assert!(matches!(load(&path), Err(PaletteError::PaletteLoad { .. })));

	let path = dir.path().join("garbage.bin");
	fs::write(&path, [0xFF_u8, 0xFE, 0x00, 0x12, 0x9A]).unwrap();
	assert!(matches!(load(&path), Err(PaletteError::PaletteLoad { .. })));

	for name in ["palette_broken.act", "palette_broken.gpl", "palette_broken.pal", "palette_broken.json"] {
		assert!(matches!(load(test_file(name)), Err(PaletteError::PaletteLoad { .. })), "{name} shouldn't load");
	}

	assert!(matches!(load(dir.path().join("missing.gpl")), Err(PaletteError::Io(_))));
}

#[test]
fn hsv_gradients_are_fatal() {
	match load(test_file("palette_hsv.ggr")) {
		Err(PaletteError::Format(FormatError::Unsupported(_))) => {}
		other => panic!("expected an unsupported gradient error, got {other:?}"),
	}
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 768, msg: \"Invalid footer value 0xFFFF\" }")]
fn palette_parsing_broken_act() {
	load_as(test_file("palette_broken.act"), PaletteFormat::AdobeAct).unwrap();
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 4, msg: \"Invalid magic sequence 0xB124\" }")]
fn palette_parsing_broken_col() {
	load_as(test_file("palette_broken.col"), PaletteFormat::AnimatorProCol).unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 4, msg: \"Malformed line\" }")]
fn palette_parsing_broken_gpl() {
	load_as(test_file("palette_broken.gpl"), PaletteFormat::Gpl).unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 2, msg: \"Not a hexadecimal color value\" }")]
fn palette_parsing_broken_hex() {
	load_as(test_file("palette_broken.hex"), PaletteFormat::Hex).unwrap();
}

#[test]
#[should_panic(expected = "InvalidJsonEntry { index: 1, msg: \"\\\"not a color\\\" is not a valid hexadecimal color value\" }")]
fn palette_parsing_broken_json() {
	load_as(test_file("palette_broken.json"), PaletteFormat::Json).unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 5, msg: \"Malformed line\" }")]
fn palette_parsing_broken_pal() {
	load_as(test_file("palette_broken.pal"), PaletteFormat::Pal).unwrap();
}
