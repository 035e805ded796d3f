use colored::Colorize;
use std::io::{self, Write};
use yearbook_core::School;

use super::formatting::format_school_line;

/// Print a result list, or the empty-result message
pub fn print_schools<W: Write>(out: &mut W, schools: &[School]) -> io::Result<()> {
    if schools.is_empty() {
        writeln!(out, "{}", "No schools found".italic())?;
        return Ok(());
    }

    for (i, school) in schools.iter().enumerate() {
        writeln!(out, "{}", format_school_line(i, school))?;
    }

    Ok(())
}

/// Show a (title, message, details) triple from the error mapper
pub fn print_error(title: &str, message: &str, details: &str) {
    eprintln!("{} {}", title.red().bold(), message);
    if !details.is_empty() {
        for line in details.lines() {
            eprintln!("  {}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_schools_lists_rows() {
        let mut out = Vec::new();
        let schools = vec![School::new("1", "Kings College"), School::new("2", "Hill School")];
        print_schools(&mut out, &schools).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Kings College"));
        assert!(text.contains("2. Hill School"));
    }

    #[test]
    fn test_print_schools_empty() {
        let mut out = Vec::new();
        print_schools(&mut out, &[]).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No schools found"));
    }
}
