//! Terminal rendition of the display surface, with an optional HTML snapshot.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use movie_client::{DisplaySurface, ListView, Row};
use tracing::warn;

pub struct TerminalSurface<W> {
    out: W,
    html_snapshot: Option<PathBuf>,
    current: ListView,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, html_snapshot: Option<PathBuf>) -> Self {
        Self {
            out,
            html_snapshot,
            current: ListView::default(),
        }
    }

    /// The view currently on screen; row numbers typed by the user index into it.
    pub fn current(&self) -> &ListView {
        &self.current
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn draw(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        let mut number = 0;
        for row in self.current.rows() {
            match row {
                Row::Movie {
                    title, year, genre, ..
                } => {
                    number += 1;
                    writeln!(
                        self.out,
                        "{number:>3}. {} ({} - {})",
                        title.text(),
                        year.text(),
                        genre.text()
                    )?;
                }
                Row::Placeholder(text) => writeln!(self.out, "     {text}")?,
                Row::Error(text) => writeln!(self.out, "  !! {}", text.text())?,
            }
        }
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn replace(&mut self, view: ListView) {
        self.current = view;
        if let Err(err) = self.draw() {
            warn!(error = %err, "failed to draw movie list");
        }
        if let Some(path) = &self.html_snapshot {
            if let Err(err) = write_snapshot(path, &self.current) {
                warn!(path = %path.display(), error = %err, "failed to write html snapshot");
            }
        }
    }
}

fn write_snapshot(path: &Path, view: &ListView) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let document = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Movies</title></head>\n<body>\n{}</body>\n</html>\n",
        view.to_html()
    );
    fs::write(path, document)
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use movie_client::render::{render_error, render_movies};
    use shared::domain::{MovieId, MovieRecord};

    use super::*;

    fn records() -> Vec<MovieRecord> {
        vec![
            MovieRecord {
                id: MovieId::Number(1),
                title: Some("Dune".into()),
                genre: Some("Sci-Fi".into()),
                year: Some(1984),
            },
            MovieRecord {
                id: MovieId::Number(2),
                title: None,
                genre: None,
                year: None,
            },
        ]
    }

    fn printed(surface: &TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.output().clone()).expect("utf8")
    }

    #[test]
    fn prints_numbered_rows() {
        let mut surface = TerminalSurface::new(Vec::new(), None);
        surface.replace(render_movies(&records()));

        let out = printed(&surface);
        assert!(out.contains("  1. Dune (1984 - Sci-Fi)"), "{out}");
        assert!(out.contains("  2. Unknown (???? - N/A)"), "{out}");
        assert_eq!(surface.current().movie_count(), 2);
    }

    #[test]
    fn prints_placeholder_and_error_rows() {
        let mut surface = TerminalSurface::new(Vec::new(), None);
        surface.replace(render_movies(&Vec::<MovieRecord>::new()));
        surface.replace(render_error("backend down"));

        let out = printed(&surface);
        assert!(out.contains("No movies found."));
        assert!(out.contains("!! backend down"));
        assert_eq!(surface.current().movie_count(), 0);
    }

    #[test]
    fn terminal_shows_unescaped_text() {
        let mut surface = TerminalSurface::new(Vec::new(), None);
        let cartoon = MovieRecord {
            id: MovieId::Number(3),
            title: Some("Tom & Jerry".into()),
            genre: Some("<Cartoon>".into()),
            year: Some(1940),
        };
        surface.replace(render_movies([&cartoon]));
        surface.replace(render_error("could not reach http://h/movies?a=1&b=2"));

        let out = printed(&surface);
        assert!(out.contains("  1. Tom & Jerry (1940 - <Cartoon>)"), "{out}");
        assert!(out.contains("!! could not reach http://h/movies?a=1&b=2"), "{out}");
        assert!(!out.contains("&amp;"), "{out}");
    }

    #[test]
    fn writes_html_snapshot_on_every_render() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let root = env::temp_dir().join(format!("movies_snapshot_test_{suffix}"));
        let path = root.join("nested").join("movies.html");
        let mut surface = TerminalSurface::new(Vec::new(), Some(path.clone()));

        let mut listed = records();
        listed[0].title = Some("Tom & Jerry".into());
        surface.replace(render_movies(&listed));
        let html = fs::read_to_string(&path).expect("snapshot");
        assert!(html.contains("data-id=\"1\""));
        assert!(html.contains("<strong>Tom &amp; Jerry</strong>"), "{html}");

        surface.replace(render_movies(&Vec::<MovieRecord>::new()));
        let html = fs::read_to_string(&path).expect("snapshot");
        assert!(!html.contains("data-id"));
        assert!(html.contains("No movies found."));

        fs::remove_dir_all(root).expect("cleanup");
    }
}
