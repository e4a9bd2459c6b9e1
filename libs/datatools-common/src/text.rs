//! Text cropping and personal name parsing

use serde::{Deserialize, Serialize};

use crate::constants::CROP_ELLIPSIS;
use crate::error::{CommonError, Result};

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Fit text into at most `max_lines` lines of fewer than `max_len_line` characters
///
/// Words are kept whole and lines are concatenated without separators, each
/// ending in the space that followed its last word. A word that does not fit
/// moves to the next line; on the last allowed line it is cut and the line is
/// closed with [`CROP_ELLIPSIS`]. Text no longer than `max_len_line` is
/// returned unchanged.
///
/// ```
/// use datatools_common::crop_text_line_by_line;
///
/// let text = "The quick brown fox jumps over the lazy dog again and again";
/// assert_eq!(
///     crop_text_line_by_line(text, 2, 20),
///     "The quick brown fox jumps over the&#133;"
/// );
/// ```
#[must_use]
pub fn crop_text_line_by_line(msg: &str, max_lines: usize, max_len_line: usize) -> String {
    if char_len(msg) <= max_len_line {
        return msg.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut pending = String::new();
    let mut line = 0;

    for word in msg.split(' ') {
        if lines.len() <= line {
            lines.push(String::new());
        }
        if line >= max_lines {
            break;
        }

        let current = &mut lines[line];
        if char_len(current) + char_len(word) + 1 < max_len_line {
            if pending.is_empty() {
                current.push_str(word);
                current.push(' ');
            } else {
                current.push_str(&pending);
                current.push(' ');
                current.push_str(word);
                current.push(' ');
                pending.clear();
            }
        } else {
            pending = word.to_string();
            if line + 1 == max_lines {
                current.push_str(word);
                let kept: String = current
                    .chars()
                    .take(max_len_line.saturating_sub(2))
                    .collect();
                *current = format!("{}{CROP_ELLIPSIS}", kept.trim());
            }
            line += 1;
        }
    }

    if line < max_lines && lines.len() <= line {
        lines.push(pending);
    }

    lines.concat()
}

/// Surname, given name and patronymic of a person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

/// Split a full name into surname, name and patronymic with normalized case
///
/// Words are separated by spaces. A hyphen joins the parts of a compound
/// word (`prokudina-gorskaya` becomes `Prokudina-Gorskaya`). Everything after
/// the second word lands in the patronymic, where only the first word is
/// capitalized. Other characters are dropped. Input without any letters is
/// returned whole as the name.
///
/// # Errors
/// Returns `CommonError::EmptyName` for an empty string
pub fn parse_full_name(full_name: &str) -> Result<FullName> {
    if full_name.is_empty() {
        return Err(CommonError::EmptyName);
    }

    let mut parts: [String; 3] = Default::default();
    let mut current: Option<usize> = None;
    let mut hyphen = false;
    let mut space = false;

    for ch in full_name.chars() {
        if !ch.is_alphabetic() {
            if current.is_some() {
                hyphen |= ch == '-';
                space |= ch == ' ';
            }
            continue;
        }

        if let Some(prev) = current {
            if hyphen {
                parts[prev].push('-');
            } else if space && prev == 2 {
                parts[prev].push(' ');
            }
        }

        let starts_word = match current {
            None => true,
            Some(index) => (space || hyphen) && index < 2,
        };
        let index = match current {
            None => 0,
            Some(index) if starts_word && !hyphen => index + 1,
            Some(index) => index,
        };

        let part = &mut parts[index];
        if starts_word {
            part.extend(ch.to_uppercase());
        } else {
            part.extend(ch.to_lowercase());
        }

        current = Some(index);
        hyphen = false;
        space = false;
    }

    if current.is_none() {
        return Ok(FullName {
            name: full_name.to_string(),
            ..FullName::default()
        });
    }

    let [surname, name, patronymic] = parts;
    Ok(FullName {
        surname,
        name,
        patronymic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_CROP_LINES, DEFAULT_CROP_LINE_LEN};

    #[test]
    fn test_crop_short_text_unchanged() {
        assert_eq!(crop_text_line_by_line("", 2, 10), "");
        assert_eq!(crop_text_line_by_line("hello world", 2, 11), "hello world");
    }

    #[test]
    fn test_crop_wraps_without_ellipsis() {
        assert_eq!(crop_text_line_by_line("hello world foo", 2, 10), "hello world foo ");
        assert_eq!(crop_text_line_by_line("hello world", 2, 8), "hello world");
    }

    #[test]
    fn test_crop_adds_ellipsis_on_last_line() {
        let text = "The quick brown fox jumps over the lazy dog again and again";
        assert_eq!(
            crop_text_line_by_line(text, 2, 20),
            "The quick brown fox jumps over the&#133;"
        );
    }

    #[test]
    fn test_crop_counts_characters_not_bytes() {
        let text = "привет мир как дела";
        let cropped = crop_text_line_by_line(text, DEFAULT_CROP_LINES, DEFAULT_CROP_LINE_LEN);
        assert_eq!(cropped, text);
    }

    #[test]
    fn test_crop_zero_lines() {
        assert_eq!(crop_text_line_by_line("a long enough sentence", 0, 5), "");
    }

    #[test]
    fn test_parse_compound_name() {
        let parsed = parse_full_name("prokudina-gorskaya anna-maria fedorovna").unwrap();
        assert_eq!(
            parsed,
            FullName {
                surname: "Prokudina-Gorskaya".to_string(),
                name: "Anna-Maria".to_string(),
                patronymic: "Fedorovna".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_normalizes_case() {
        let parsed = parse_full_name("IVANOV  ivan PETROVICH ogly").unwrap();
        assert_eq!(parsed.surname, "Ivanov");
        assert_eq!(parsed.name, "Ivan");
        assert_eq!(parsed.patronymic, "Petrovich ogly");
    }

    #[test]
    fn test_parse_single_word() {
        let parsed = parse_full_name("anna").unwrap();
        assert_eq!(parsed.surname, "Anna");
        assert!(parsed.name.is_empty());
        assert!(parsed.patronymic.is_empty());
    }

    #[test]
    fn test_parse_without_letters() {
        let parsed = parse_full_name("42 - 7").unwrap();
        assert_eq!(parsed.name, "42 - 7");
        assert!(parsed.surname.is_empty());
    }

    #[test]
    fn test_parse_empty_name() {
        assert_eq!(parse_full_name(""), Err(CommonError::EmptyName));
    }
}
