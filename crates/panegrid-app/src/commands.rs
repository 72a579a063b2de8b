//! Sub-window CRUD subcommands over the file store.

use std::io::Write;

use panegrid_common::{PanegridError, SubWindowId};
use panegrid_store::FileStore;

use crate::cli::Command;

/// Run a non-interactive subcommand. `Run` is handled by the caller.
pub fn run(command: &Command, store: &FileStore, out: &mut impl Write) -> Result<(), PanegridError> {
    match command {
        Command::Run => Ok(()),
        Command::List => list(store, out),
        Command::Add { name, url } => {
            let record = store.add_sub_window(name, url)?;
            writeln!(out, "added {} {}", record.id, record.name)?;
            Ok(())
        }
        Command::Remove { id } => {
            let id = SubWindowId::new(i64::from(*id))
                .ok_or_else(|| PanegridError::Other(format!("invalid sub-window id {id}")))?;
            store.remove_sub_window(id)?;
            writeln!(out, "removed {id}")?;
            Ok(())
        }
    }
}

fn list(store: &FileStore, out: &mut impl Write) -> Result<(), PanegridError> {
    let all = store.all_sub_windows()?;
    if all.is_empty() {
        writeln!(out, "no sub-windows; add one with `panegrid add NAME URL`")?;
        return Ok(());
    }
    for sub in all {
        let flag = if sub.enabled { " " } else { "-" };
        writeln!(
            out,
            "{flag}{:>4}  {:<24} {}  (updated {})",
            sub.id,
            sub.name,
            sub.url,
            sub.updated_at.format("%Y-%m-%d %H:%M")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use panegrid_common::StoreError;

    fn output(command: Command, store: &FileStore) -> Result<String, PanegridError> {
        let mut out = Vec::new();
        run(&command, store, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn add_list_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let added = output(
            Command::Add {
                name: "Mail".into(),
                url: "mail.test".into(),
            },
            &store,
        )
        .unwrap();
        assert_eq!(added, "added 1 Mail\n");

        let listing = output(Command::List, &store).unwrap();
        assert!(listing.contains("Mail"));
        assert!(listing.contains("mail.test"));

        assert_eq!(
            output(Command::Remove { id: 1 }, &store).unwrap(),
            "removed 1\n"
        );
        assert!(output(Command::List, &store)
            .unwrap()
            .starts_with("no sub-windows"));
    }

    #[test]
    fn removing_unknown_or_zero_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            output(Command::Remove { id: 7 }, &store),
            Err(PanegridError::Store(StoreError::NotFound(_)))
        ));
        assert!(matches!(
            output(Command::Remove { id: 0 }, &store),
            Err(PanegridError::Other(_))
        ));
    }
}
