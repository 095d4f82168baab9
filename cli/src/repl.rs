//! Interactive loop: read a cigar name, show three matches, repeat until EOF or quit.
//!
//! The session's seen list carries across turns so later answers avoid earlier ones.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use cli::Session;

/// Runs the REPL loop: prompt, read line, search, print, repeat.
///
/// Exits on EOF (Ctrl+D) or `quit`/`exit`/`/quit`. A blank line prints the
/// "enter a cigar name" hint; a failed search prints the apology and continues.
pub async fn run_repl_loop(
    session: &mut Session,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("cigar> ");
        std::io::stdout().flush()?;

        let line = match reader.next_line().await? {
            None => break,
            Some(s) if is_quit_command(&s) => break,
            Some(s) => s,
        };

        if !line.trim().is_empty() {
            eprintln!("Finding great matches…");
        }
        let outcome = session.search(&line).await;
        println!("{}\n", outcome.render(json)?);
    }

    println!("Bye.");
    Ok(())
}

fn is_quit_command(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "quit" | "exit" | "/quit" | "/exit"
    )
}
