//! Interactive console front-end.
//!
//! A fixed numbered menu on stdout, one operator choice per iteration on
//! stdin. Generic over the reader and writer so whole sessions can be
//! scripted in tests.

use std::io::{self, BufRead, Write};

use crate::error::AppResult;
use crate::services::{BorrowOutcome, LibraryService, ReturnOutcome};

const MENU: &str = "=== LIBRARY MANAGEMENT SYSTEM ===
1. Add book.
2. Borrow book.
3. Return book.
4. Search book.
5. Show all books.
6. Show total borrowed books.
7. Exit.";

/// Run the menu loop until the operator exits or input ends.
///
/// Save failures bubble up as errors and end the process; everything the
/// operator can get wrong is reported as a normal message and loops.
pub fn run<R: BufRead, W: Write>(
    service: &mut LibraryService,
    mut input: R,
    mut output: W,
) -> AppResult<()> {
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut output, "Enter your choice (1-7): ")? else {
            break;
        };
        match choice.trim() {
            "1" => add_book(service, &mut input, &mut output)?,
            "2" => borrow_book(service, &mut input, &mut output)?,
            "3" => return_book(service, &mut input, &mut output)?,
            "4" => search_book(service, &mut input, &mut output)?,
            "5" => show_books(service, &mut output)?,
            "6" => writeln!(
                output,
                "Total borrowed books: {}\n",
                service.borrowed_count()
            )?,
            "7" => {
                writeln!(output, "Exiting the program... Good Bye")?;
                break;
            }
            _ => writeln!(output, "Invalid Choice!!!\n")?,
        }
    }
    Ok(())
}

/// Write a prompt, flush, and read one line. `None` means end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn add_book<R: BufRead, W: Write>(
    service: &mut LibraryService,
    input: &mut R,
    output: &mut W,
) -> AppResult<()> {
    let Some(title) = prompt(input, output, "Enter book title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, output, "Enter the author's name: ")? else {
        return Ok(());
    };
    let Some(copies) = prompt_copies(input, output)? else {
        return Ok(());
    };

    service.add_book(title.trim().to_string(), author.trim().to_string(), copies)?;
    writeln!(output, "Book added successfully!\n")?;
    Ok(())
}

/// Reprompt until the operator supplies a non-negative integer, with a
/// distinct message for non-numeric and negative input.
fn prompt_copies<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> AppResult<Option<u64>> {
    loop {
        let Some(raw) = prompt(input, output, "Enter the number of copies: ")? else {
            return Ok(None);
        };
        match raw.trim().parse::<i64>() {
            Ok(n) if n < 0 => writeln!(output, "Please enter a non-negative integer.")?,
            Ok(n) => return Ok(Some(n as u64)),
            Err(_) => writeln!(output, "Please enter a valid integer for copies.")?,
        }
    }
}

fn borrow_book<R: BufRead, W: Write>(
    service: &mut LibraryService,
    input: &mut R,
    output: &mut W,
) -> AppResult<()> {
    let Some(title) = prompt(input, output, "Enter the book title to borrow: ")? else {
        return Ok(());
    };
    match service.borrow_book(&title)? {
        BorrowOutcome::Borrowed => writeln!(output, "Book borrowed successfully!\n")?,
        BorrowOutcome::Unavailable => {
            writeln!(output, "Sorry! This book is not currently available.\n")?
        }
        BorrowOutcome::NotFound => writeln!(output, "Book not found!\n")?,
    }
    Ok(())
}

fn return_book<R: BufRead, W: Write>(
    service: &mut LibraryService,
    input: &mut R,
    output: &mut W,
) -> AppResult<()> {
    let Some(title) = prompt(input, output, "Enter the book title to return: ")? else {
        return Ok(());
    };
    match service.return_book(&title)? {
        ReturnOutcome::Returned => writeln!(output, "Book returned successfully!\n")?,
        ReturnOutcome::NotFound => writeln!(output, "Book not found in library records.\n")?,
    }
    Ok(())
}

fn search_book<R: BufRead, W: Write>(
    service: &mut LibraryService,
    input: &mut R,
    output: &mut W,
) -> AppResult<()> {
    let Some(title) = prompt(input, output, "Enter the book title to search: ")? else {
        return Ok(());
    };
    match service.search_book(&title) {
        Some(book) => {
            writeln!(output, "\nBook found.")?;
            writeln!(output, "Title: {}", book.display_title())?;
            writeln!(output, "Author: {}", book.display_author())?;
            writeln!(output, "Available Copies: {}\n", book.copies)?;
        }
        None => writeln!(output, "Book not found in library.\n")?,
    }
    Ok(())
}

fn show_books<W: Write>(service: &LibraryService, output: &mut W) -> AppResult<()> {
    if service.books().is_empty() {
        writeln!(output, "No books in library!\n")?;
        return Ok(());
    }
    writeln!(output, "\n==== Library Books ====")?;
    for (i, book) in service.books().iter().enumerate() {
        writeln!(
            output,
            "{}. {} by {} (Copies: {})",
            i + 1,
            book.display_title(),
            book.display_author(),
            book.copies
        )?;
    }
    writeln!(output, "=======================\n")?;
    Ok(())
}
