//! Decode sentences from stdin and print each packet.
//!
//! Run with:
//!   printf '$PNIX,US,TR,7,0>31>0,7.196334,10794.502*0B\r\n' \
//!     | cargo run --example decode-stream
//!
//! Unknown sentences are counted and skipped; malformed lines are reported.

use std::io;

use nmeaprims::frame::SentenceReader;
use nmeaprims::SentenceParser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let parser = SentenceParser::new();
    let reader = SentenceReader::new(io::stdin().lock());

    let mut skipped = 0usize;
    for frame in reader {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                eprintln!("Bad line: {e}");
                continue;
            }
        };

        match parser.decode(&frame) {
            Ok(packet) => match frame.talker_name() {
                Some(talker) => println!("[{talker}] {packet:?}"),
                None => println!("{packet:?}"),
            },
            Err(e) if e.is_unknown_sentence() => skipped += 1,
            Err(e) => eprintln!("Bad {} sentence: {e}", frame.sentence_id),
        }
    }

    eprintln!("Skipped {skipped} unknown sentences");
    Ok(())
}
