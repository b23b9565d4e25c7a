// src/main.rs
// Console presentation layer for the BookDesk catalog.
//
// Stands in for the original desktop window: it owns the selection cursor,
// renders the table, captures field input, and drives the command layer.
// All catalog state is process-local and discarded on exit.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

use bookdesk::application::commands::{
    add_book, delete_book, get_book, list_books, search_books, update_book,
};
use bookdesk::application::dto::BookFormDto;
use bookdesk::application::state::AppState;
use bookdesk::domain::Genre;

type InputLines = io::Lines<io::StdinLock<'static>>;

fn main() -> Result<()> {
    env_logger::init();

    let mut lines = io::stdin().lock().lines();
    let mut state = AppState::new();
    // The selection cursor lives here, not in the catalog.
    let mut selection: Option<usize> = None;

    println!("BookDesk - Library Catalog");
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let (command, rest) = split_command(&line);

        match command {
            "" => {}
            "list" => render_table(&state, selection),
            "add" => {
                let form = read_form(&mut lines)?;
                match add_book(&mut state, form) {
                    Ok(index) => println!("Added at row {}.", index),
                    Err(message) => println!("{}", message),
                }
            }
            "select" => match rest.parse::<usize>() {
                Ok(index) => match get_book(&state, index) {
                    Some(row) => {
                        selection = Some(index);
                        println!(
                            "Selected row {}: {} by {}",
                            index, row.title, row.author
                        );
                    }
                    None => println!("No such row."),
                },
                Err(_) => println!("Usage: select <row>"),
            },
            "update" => {
                if selection.is_none() {
                    println!("Please select a book to update.");
                } else {
                    let form = read_form(&mut lines)?;
                    match update_book(&mut state, selection, form) {
                        Ok(()) => {
                            println!("Updated.");
                            selection = None;
                        }
                        Err(message) => println!("{}", message),
                    }
                }
            }
            "delete" => {
                if selection.is_none() {
                    println!("Please select a book to delete.");
                } else if confirm(&mut lines, "Are you sure you want to delete this book?")? {
                    match delete_book(&mut state, selection) {
                        Ok(()) => {
                            println!("Deleted.");
                            selection = None;
                        }
                        Err(message) => println!("{}", message),
                    }
                }
            }
            "search" => match search_books(&state, rest) {
                Ok(index) => {
                    selection = Some(index);
                    render_table(&state, selection);
                }
                Err(message) => println!("{}", message),
            },
            "clear" => {
                selection = None;
                println!("Selection cleared.");
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  list            show the catalog");
    println!("  add             add a book (prompts for each field)");
    println!("  select <row>    pick a row for update/delete");
    println!("  update          replace the selected row");
    println!("  delete          remove the selected row");
    println!("  search <text>   select the first title containing <text>");
    println!("  clear           drop the selection");
    println!("  quit            exit (the catalog is not saved)");
}

fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn render_table(state: &AppState, selection: Option<usize>) {
    let rows = list_books(state);
    if rows.is_empty() {
        println!("(catalog is empty)");
        return;
    }

    println!(
        "    {:<4} {:<28} {:<22} {:<14} {:<6} {:<12} {}",
        "Row", "Title", "Author", "ISBN", "Year", "Genre", "Available"
    );
    for (index, row) in rows.iter().enumerate() {
        let marker = if selection == Some(index) { "*" } else { " " };
        println!(
            "  {} {:<4} {:<28} {:<22} {:<14} {:<6} {:<12} {}",
            marker,
            index,
            row.title,
            row.author,
            row.isbn,
            row.publication_year,
            row.genre,
            if row.available { "yes" } else { "no" }
        );
    }
}

fn read_form(lines: &mut InputLines) -> Result<BookFormDto> {
    let title = prompt(lines, "Title")?;
    let author = prompt(lines, "Author")?;
    let isbn = prompt(lines, "ISBN")?;
    let publication_year = prompt(lines, "Publication year")?;
    let genre = prompt_genre(lines)?;
    let available = confirm(lines, "Available?")?;

    Ok(BookFormDto {
        title,
        author,
        isbn,
        publication_year,
        genre,
        available,
    })
}

fn prompt_genre(lines: &mut InputLines) -> Result<String> {
    let labels: Vec<String> = Genre::ALL.iter().map(Genre::to_string).collect();
    let answer = prompt(lines, &format!("Genre [{}]", labels.join(", ")))?;
    if answer.is_empty() {
        // Blank keeps the selector default: the first value.
        Ok(Genre::ALL[0].to_string())
    } else {
        Ok(answer)
    }
}

fn confirm(lines: &mut InputLines, question: &str) -> Result<bool> {
    let answer = prompt(lines, &format!("{} (y/n)", question))?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

fn prompt(lines: &mut InputLines, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim_end().to_string()),
        None => bail!("input closed"),
    }
}
