use std::fmt::UpperHex;

use unicode_lexclass::Classification;

/// представить массив чисел в текстовом виде
pub fn format_num_vec<T: UpperHex + Into<u64> + Copy>(input: &[T], boundary: usize) -> String
{
    let items: Vec<String> = input
        .iter()
        .map(|&e| match e.into() == 0 {
            true => "0, ".to_owned(),
            false => format!("0x{:X}, ", e),
        })
        .collect();

    wrap(&items, boundary)
}

/// представить массив классов в текстовом виде
pub fn format_class_vec(input: &[Classification], boundary: usize) -> String
{
    let items: Vec<String> = input
        .iter()
        .map(|class| format!("Classification::{}, ", class.variant_name()))
        .collect();

    wrap(&items, boundary)
}

/// разбить элементы на строки, не длиннее boundary
fn wrap(items: &[String], boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for e_str in items {
        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}
