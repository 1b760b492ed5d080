/*
MIT License
Copyright (c)  Germán Molina
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

use std::fmt::Display;

fn in_module<C: Display, T: Display>(module_name: C, msg: T) -> String {
    let module_name = module_name.to_string();
    if module_name.is_empty() {
        msg.to_string()
    } else {
        format!("[in {}] {}", module_name, msg)
    }
}

/// Prints a warning message to STDERR.
///
/// Results go to STDOUT (or to a file), so warnings never
/// get mixed with them.
///
/// ```
/// use sunmodel::print_warning;
/// print_warning("Surface", "some warning");
/// ```
pub fn print_warning<C: Display, T: Display>(module_name: C, msg: T) {
    eprintln!("Warning: {}", in_module(module_name, msg))
}

/// Prints an error message to STDERR.
///
/// An empty `module_name` prints the message alone.
///
/// ```
/// use sunmodel::print_error;
/// print_error("", "some error");
/// ```
pub fn print_error<C: Display, T: Display>(module_name: C, msg: T) {
    eprintln!("Error: {}", in_module(module_name, msg))
}
