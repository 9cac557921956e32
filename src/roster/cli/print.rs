use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::error::RosterError;
use roster::index::IndexedStudent;
use roster::model::Student;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_COLUMN_WIDTH: usize = 32;
const HEADERS: [&str; 5] = ["#", "Name", "Student ID", "Email", "Contact"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Prints an error. Validation failures get one line per field.
pub(super) fn print_error(error: &RosterError) {
    match error.field_errors() {
        Some(errors) => {
            for (_, message) in errors.messages() {
                eprintln!("{} {}", "✗".red(), message.red());
            }
        }
        None => eprintln!("{} {}", "Error:".red().bold(), error),
    }
}

pub(super) fn print_students(students: &[IndexedStudent]) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    let rows: Vec<[String; 5]> = students
        .iter()
        .map(|entry| {
            [
                entry.index.to_string(),
                truncate_to_width(&entry.student.name, MAX_COLUMN_WIDTH),
                entry.student.student_id.clone(),
                truncate_to_width(&entry.student.email, MAX_COLUMN_WIDTH),
                entry.student.contact.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect();
    println!("{}", header.join("  ").bold());

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, w))| {
                let padded = pad(cell, *w);
                if col == 0 {
                    padded.yellow().to_string()
                } else {
                    padded
                }
            })
            .collect();
        println!("{}", cells.join("  ").trim_end());
    }
}

/// Prints one student as a form, used when an edit session opens.
pub(super) fn print_form(student: &Student) {
    let fields = [
        ("Name:", &student.name),
        ("Student ID:", &student.student_id),
        ("Email:", &student.email),
        ("Contact:", &student.contact),
    ];
    for (label, value) in fields {
        println!("  {} {}", format!("{:<11}", label).dimmed(), value);
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
