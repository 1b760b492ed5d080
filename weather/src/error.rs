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

/// Reasons why a [`RadiationSeries`](crate::RadiationSeries) could not be
/// acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The source could not be opened or read
    Io {
        /// The file that was being read
        path: String,
        /// What the operating system said
        message: String,
    },

    /// The header row does not contain a required column
    MissingColumn(String),

    /// A cell could not be interpreted as a number
    InvalidValue {
        /// The line of the file (starting at 1, header included)
        line: u64,
        /// The name of the column
        column: String,
        /// The offending text
        value: String,
    },

    /// The file is not valid CSV (e.g., rows have different lengths)
    Malformed(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io { path, message } => {
                write!(f, "Could not read radiation file '{}': {}", path, message)
            }
            InputError::MissingColumn(c) => {
                write!(f, "Radiation data has no column named '{}'", c)
            }
            InputError::InvalidValue {
                line,
                column,
                value,
            } => write!(
                f,
                "Invalid value '{}' in column '{}' at line {}",
                value, column, line
            ),
            InputError::Malformed(msg) => write!(f, "Malformed radiation data: {}", msg),
        }
    }
}

impl std::error::Error for InputError {}

impl From<csv::Error> for InputError {
    fn from(e: csv::Error) -> Self {
        InputError::Malformed(e.to_string())
    }
}

impl From<InputError> for String {
    fn from(e: InputError) -> Self {
        format!("Input acquisition failed: {}", e)
    }
}
