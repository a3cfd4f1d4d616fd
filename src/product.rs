// 🍎 Product Entity - one inventory record
//
// A product is a VALUE: name, price and quantity are fixed at construction.
// Two products are the same product when all three fields are equal.
//
// Line format: <name>,<price>,<quantity>
// - Plain names are written verbatim ("Apple,0.5,100")
// - Names holding ',' or '"' are quoted with "" escaping ("\"Eggs, large\",3.25,12")

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Number of fields in a persisted line
pub const FIELD_COUNT: usize = 3;

// ============================================================================
// PRODUCT ENTITY
// ============================================================================

/// Value equality follows IEEE float equality on `price`: a NaN price never
/// equals anything, itself included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
    quantity: i32,
}

impl Product {
    /// Create a product. Values are accepted as given.
    pub fn new(name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Product {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    // ========================================================================
    // LINE CODEC
    // ========================================================================

    /// Render as a single CSV line, without the line terminator
    ///
    /// Goes through the fallible `csv::Writer` API; writing into memory does
    /// not fail in practice, but its errors are passed on rather than unwrapped.
    pub fn to_csv_line(&self) -> csv::Result<String> {
        let price = format_price(self.price);
        let quantity = self.quantity.to_string();

        let mut buf = Vec::new();
        {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .quote_style(csv::QuoteStyle::Necessary)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(&mut buf);

            wtr.write_record([self.name.as_str(), price.as_str(), quantity.as_str()])?;
            wtr.flush()?;
        }

        let mut line = String::from_utf8(buf)
            .map_err(|err| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, err)))?;

        if line.ends_with('\n') {
            line.pop();
        }

        Ok(line)
    }

    /// Parse a line produced by `to_csv_line`
    ///
    /// Exactly three fields in fixed order. An unquoted name containing ','
    /// splits into too many fields and is rejected.
    pub fn from_csv_line(line: &str) -> Result<Product, ParseError> {
        if line.is_empty() {
            return Err(ParseError::FieldCount {
                expected: FIELD_COUNT,
                found: 0,
            });
        }

        check_quoting(line)?;

        // Leading empty field: the reader strips a U+FEFF at the very start of
        // its input as a BOM, which would eat the first char of such a name.
        let input = format!(",{}", line);
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input.as_bytes());

        let mut full = csv::StringRecord::new();
        let read = rdr
            .read_record(&mut full)
            .map_err(|err| ParseError::Malformed {
                position: err.position().map_or(0, |pos| pos.byte() as usize),
                reason: err.to_string(),
            })?;
        if !read {
            return Err(ParseError::FieldCount {
                expected: FIELD_COUNT,
                found: 0,
            });
        }
        let record: csv::StringRecord = full.iter().skip(1).collect();

        if record.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount {
                expected: FIELD_COUNT,
                found: record.len(),
            });
        }

        let price_field = &record[1];
        let price = price_field
            .parse::<f64>()
            .map_err(|source| ParseError::InvalidPrice {
                value: price_field.to_string(),
                source,
            })?;

        let quantity_field = &record[2];
        let quantity = quantity_field
            .parse::<i32>()
            .map_err(|source| ParseError::InvalidQuantity {
                value: quantity_field.to_string(),
                source,
            })?;

        Ok(Product::new(&record[0], price, quantity))
    }
}

/// Reject quoting the lenient csv reader would silently accept
///
/// A field is either unquoted with no '"' in it, or fully quoted with inner
/// quotes doubled and nothing between the closing quote and the next ','.
fn check_quoting(line: &str) -> Result<(), ParseError> {
    let mut chars = line.char_indices().peekable();
    let mut at_field_start = true;

    while let Some((pos, c)) = chars.next() {
        match c {
            '"' if at_field_start => {
                loop {
                    match chars.next() {
                        Some((_, '"')) => {
                            if matches!(chars.peek(), Some((_, '"'))) {
                                chars.next();
                                continue;
                            }
                            break;
                        }
                        Some(_) => {}
                        None => {
                            return Err(ParseError::Malformed {
                                position: pos,
                                reason: "unterminated quoted field".to_string(),
                            })
                        }
                    }
                }

                match chars.next() {
                    None | Some((_, ',')) => at_field_start = true,
                    Some((after, _)) => {
                        return Err(ParseError::Malformed {
                            position: after,
                            reason: "text after closing quote".to_string(),
                        })
                    }
                }
            }
            '"' => {
                return Err(ParseError::Malformed {
                    position: pos,
                    reason: "quote inside unquoted field".to_string(),
                })
            }
            ',' => at_field_start = true,
            _ => at_field_start = false,
        }
    }

    Ok(())
}

/// Shortest round-tripping decimal, always with a fractional part ("2.0", not "2")
fn format_price(price: f64) -> String {
    format!("{:?}", price)
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{name='{}', price={}, quantity={}}}",
            self.name,
            format_price(self.price),
            self.quantity
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
