//! Command loop wiring console input to controller transitions.

use std::io::{BufRead, Write};

use anyhow::Result;
use movie_client::{ActionKind, Controller, CreateForm, Interaction, MovieStore};
use tracing::debug;

use crate::{
    commands::{self, Command, HELP},
    console::Console,
    surface::TerminalSurface,
};

pub type ConsoleController<S, R, W, V> = Controller<S, TerminalSurface<V>, Console<R, W>>;

pub async fn run<S, R, W, V>(controller: &mut ConsoleController<S, R, W, V>) -> Result<()>
where
    S: MovieStore,
    R: BufRead,
    W: Write,
    V: Write,
{
    controller.refresh().await;
    // Survives a failed submit so the next `add` starts from what was typed.
    let mut form = CreateForm::default();

    while let Some(line) = controller.interaction_mut().read_line("movies> ")? {
        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                controller.interaction_mut().alert(&err.to_string());
                continue;
            }
        };
        debug!(?command, "console command");

        match command {
            Command::Quit => break,
            Command::Help => controller.interaction_mut().say(HELP)?,
            Command::Refresh => {
                controller.refresh().await;
            }
            Command::Search(term) => {
                controller.search(&term);
            }
            Command::Add => {
                if fill_form(controller.interaction_mut(), &mut form) {
                    controller.submit_create(&mut form).await;
                }
            }
            Command::Edit(row) => run_row_action(controller, row, ActionKind::Edit).await,
            Command::Delete(row) => run_row_action(controller, row, ActionKind::Delete).await,
        }
    }

    Ok(())
}

async fn run_row_action<S, R, W, V>(
    controller: &mut ConsoleController<S, R, W, V>,
    row: usize,
    kind: ActionKind,
) where
    S: MovieStore,
    R: BufRead,
    W: Write,
    V: Write,
{
    let action = controller
        .surface()
        .current()
        .action(row.saturating_sub(1), kind)
        .cloned();
    match action {
        Some(action) => {
            controller.invoke(&action).await;
        }
        None => controller
            .interaction_mut()
            .alert(&format!("No movie on row {row}")),
    }
}

/// Collects the three create fields. Returns false if the user cancelled, in
/// which case `form` is left as it was.
fn fill_form<I: Interaction>(interaction: &mut I, form: &mut CreateForm) -> bool {
    let Some(title) = interaction.prompt("Title:", &form.title) else {
        return false;
    };
    let Some(genre) = interaction.prompt("Genre:", &form.genre) else {
        return false;
    };
    let Some(year) = interaction.prompt("Year (1800-2100):", &form.year) else {
        return false;
    };
    *form = CreateForm::new(title, genre, year);
    true
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use async_trait::async_trait;
    use movie_client::NetworkError;
    use shared::{
        domain::{MovieId, MovieRecord},
        protocol::MoviePayload,
    };
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        movies: Mutex<Vec<MovieRecord>>,
        deleted: Mutex<Vec<MovieId>>,
        created: Mutex<Vec<MoviePayload>>,
    }

    #[async_trait]
    impl MovieStore for MemoryStore {
        fn endpoint(&self) -> &str {
            "memory"
        }

        async fn list(&self) -> Result<Vec<MovieRecord>, NetworkError> {
            Ok(self.movies.lock().expect("lock").clone())
        }

        async fn create(&self, payload: &MoviePayload) -> Result<(), NetworkError> {
            self.created.lock().expect("lock").push(payload.clone());
            let mut movies = self.movies.lock().expect("lock");
            let id = MovieId::Number(movies.len() as i64 + 10);
            movies.push(MovieRecord {
                id,
                title: Some(payload.title.clone()),
                genre: Some(payload.genre.clone()),
                year: Some(payload.year),
            });
            Ok(())
        }

        async fn update(&self, _id: &MovieId, _payload: &MoviePayload) -> Result<(), NetworkError> {
            Ok(())
        }

        async fn delete(&self, id: &MovieId) -> Result<(), NetworkError> {
            self.deleted.lock().expect("lock").push(id.clone());
            self.movies.lock().expect("lock").retain(|m| &m.id != id);
            Ok(())
        }
    }

    fn movie(id: i64, title: &str) -> MovieRecord {
        MovieRecord {
            id: MovieId::Number(id),
            title: Some(title.into()),
            genre: Some("Drama".into()),
            year: Some(2000),
        }
    }

    type TestController =
        ConsoleController<MemoryStore, Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn controller(movies: Vec<MovieRecord>, input: &str) -> TestController {
        let store = MemoryStore {
            movies: Mutex::new(movies),
            ..MemoryStore::default()
        };
        Controller::new(
            store,
            TerminalSurface::new(Vec::new(), None),
            Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
        )
    }

    fn console_output(controller: &TestController) -> String {
        String::from_utf8(controller.interaction().output().clone()).expect("utf8")
    }

    #[tokio::test]
    async fn delete_targets_id_bound_to_the_filtered_row() {
        let mut controller = controller(
            vec![movie(7, "Heat"), movie(8, "Ran"), movie(9, "Rango")],
            "search ran\ndelete 2\ny\nquit\n",
        );

        run(&mut controller).await.expect("run");

        assert_eq!(
            *controller.store().deleted.lock().expect("lock"),
            vec![MovieId::Number(9)]
        );
        assert_eq!(controller.cache().len(), 2);
    }

    #[tokio::test]
    async fn add_prompts_fields_and_submits() {
        let mut controller = controller(vec![], "add\nArrival\n\n2016\n");

        run(&mut controller).await.expect("run");

        assert_eq!(
            *controller.store().created.lock().expect("lock"),
            vec![MoviePayload {
                title: "Arrival".into(),
                genre: "Unknown".into(),
                year: 2016,
            }]
        );
        assert_eq!(controller.surface().current().movie_count(), 1);
    }

    #[tokio::test]
    async fn cancelled_add_submits_nothing() {
        let mut controller = controller(vec![], "add\nArrival\n.\n");

        run(&mut controller).await.expect("run");

        assert!(controller.store().created.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn invalid_add_keeps_typed_values_for_next_attempt() {
        let mut controller = controller(vec![], "add\nArrival\nSci-Fi\n1700\nadd\n\n\n2016\n");

        run(&mut controller).await.expect("run");

        assert_eq!(
            *controller.store().created.lock().expect("lock"),
            vec![MoviePayload {
                title: "Arrival".into(),
                genre: "Sci-Fi".into(),
                year: 2016,
            }]
        );
        assert!(console_output(&controller)
            .contains("! Please enter a valid title and year (1800-2100)"));
    }

    #[tokio::test]
    async fn unknown_rows_and_commands_are_reported() {
        let mut controller = controller(vec![movie(1, "Heat")], "edit 5\nfly\n");

        run(&mut controller).await.expect("run");

        let out = console_output(&controller);
        assert!(out.contains("! No movie on row 5"), "{out}");
        assert!(out.contains("! unknown command 'fly'"), "{out}");
    }
}
