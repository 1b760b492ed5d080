/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use clap::Parser;
use sunmodel::run_transposition::*;

fn run_to_output(options: &TranspositionOptions) -> Result<(), String> {
    match &options.output {
        Some(v) => {
            let out = std::fs::File::create(v)
                .map_err(|e| format!("Could not create output file '{}': {}", v, e))?;
            run(options, out)?;
        }
        None => {
            run(options, std::io::stdout().lock())?;
        }
    }
    Ok(())
}

fn main() {
    // cargo run --release -- -i LiuJordanData.csv -p LiuJordanData.svg

    let options = TranspositionOptions::parse();

    if let Err(e) = run_to_output(&options) {
        sunmodel::print_error("", e);
        std::process::exit(1);
    }
}
