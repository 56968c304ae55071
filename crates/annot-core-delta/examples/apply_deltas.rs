//! Reads one delta request (JSON) from stdin and writes the response
//! envelope to stdout.
//!
//! ```sh
//! cargo run --example apply_deltas < request.json
//! ```

use std::io::Read;

fn main() {
    let mut request = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut request) {
        eprintln!("failed to read request: {err}");
        std::process::exit(1);
    }

    match annot_core_delta::process_request(&request) {
        Ok(response) => println!("{response}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
