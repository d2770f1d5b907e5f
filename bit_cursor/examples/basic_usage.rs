use bit_cursor::{BitCursor, BitCursorError, BitReader, BitWriter};

fn main() {
    println!("=== Bit Cursor Examples ===\n");

    // Example 1: Packing a small record
    if let Err(e) = example_record() {
        println!("  failed: {e}");
    }

    // Example 2: Error reporting
    example_errors();
}

/// 3-bit version, 5-bit flags, then a length-prefixed payload.
fn example_record() -> Result<(), BitCursorError> {
    println!("Example 1: Packing a record header");

    let payload = b"hello";
    let mut writer = BitWriter::new();
    writer.emit(0b010, 3)?;
    writer.emit(0b1_0011, 5)?;
    writer.emit_word(payload.len() as u16);
    writer.append_bytes(payload)?;

    let bytes = writer.into_bytes();
    println!("  Encoded {} bytes: {:02X?}", bytes.len(), bytes);

    let mut reader = BitReader::new(&bytes);
    let version = reader.collect(3)?;
    let flags = reader.collect(5)?;
    let len = reader.collect_word()?;
    let text = reader.deconcat(len as usize);
    println!("  version={version} flags={flags:#07b} text={text:?}");
    println!("  more bytes after payload: {}", reader.has_more_bytes());
    println!();

    Ok(())
}

fn example_errors() {
    println!("Example 2: Errors");

    let mut writer = BitWriter::new();
    if let Err(e) = writer.emit(1, 40) {
        println!("  emit(1, 40): {e}");
    }

    let bytes = [0xF0];
    let mut reader = BitReader::new(&bytes);
    let _ = reader.collect(2);
    if let Err(e) = reader.collect_byte() {
        println!("  collect_byte mid-byte: {e}");
    }
    reader.align_to_next_byte();
    if let Err(e) = reader.collect(1) {
        println!("  collect past end: {e}");
    }
}
