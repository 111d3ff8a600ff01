//! Raw-mode input for the interactive session.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, print_error, reset_terminal};

/// Read one line with basic editing. Returns None if cancelled (Esc/Ctrl+Q).
pub fn read_line(prompt: &str, initial: &str) -> Option<String> {
    let mut chars: Vec<char> = initial.chars().collect();
    let mut cursor = chars.len();
    let mut cancelled = false;

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        // Raw mode unavailable (e.g. piped stdin): plain line read.
        Err(_) => return fallback_line(prompt),
    };

    let mut drawn = chars.len();
    redraw(prompt, &chars, cursor, &mut drawn);

    loop {
        match read() {
            Ok(Event::Key(key)) => {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        // process::exit skips destructors, reset first
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        chars.clear();
                        cursor = 0;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor > 0 {
                            cursor -= 1;
                            chars.remove(cursor);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor < chars.len() {
                            chars.remove(cursor);
                        }
                    }
                    KeyCode::Left => cursor = cursor.saturating_sub(1),
                    KeyCode::Right => {
                        if cursor < chars.len() {
                            cursor += 1;
                        }
                    }
                    KeyCode::Home => cursor = 0,
                    KeyCode::End => cursor = chars.len(),
                    KeyCode::Char(c) => {
                        chars.insert(cursor, c);
                        cursor += 1;
                    }
                    _ => {}
                }
                redraw(prompt, &chars, cursor, &mut drawn);
            }
            Err(_) => break,
            _ => {}
        }
    }

    // Leave raw mode before the newline prints
    drop(guard);
    println!();
    if cancelled {
        None
    } else {
        Some(chars.into_iter().collect())
    }
}

fn redraw(prompt: &str, chars: &[char], cursor: usize, drawn: &mut usize) {
    let line: String = chars.iter().collect();
    print!("\r{}: {}", prompt, " ".repeat(*drawn + 1));
    print!("\r{prompt}: {line}");
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
    flush();
    *drawn = chars.len();
}

/// Single-key yes/no prompt. Returns None if cancelled (Esc/Ctrl+Q).
pub fn confirm(prompt: &str) -> Option<bool> {
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return fallback_confirm(prompt),
    };

    print!("{prompt} [y/n]: ");
    flush();

    let answer = loop {
        match read() {
            Ok(Event::Key(key)) => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => break None,
                KeyCode::Esc => break None,
                KeyCode::Char('y' | 'Y') => break Some(true),
                KeyCode::Char('n' | 'N') => break Some(false),
                _ => {}
            },
            Err(_) => break None,
            _ => {}
        }
    };

    drop(guard);
    match answer {
        Some(yes) => println!("{}", if yes { "y" } else { "n" }),
        None => println!(),
    }
    answer
}

fn fallback_line(prompt: &str) -> Option<String> {
    print!("{prompt}: ");
    flush();
    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn fallback_confirm(prompt: &str) -> Option<bool> {
    loop {
        let line = fallback_line(&format!("{prompt} [y/n]"))?;
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Some(true),
            "n" | "no" => return Some(false),
            _ => print_error("Please enter 'y' or 'n'."),
        }
    }
}
