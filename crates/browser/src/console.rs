//! Line-oriented host for the browser window.
//!
//! Each input line is one toolbar, menu or tab action, so the shell can be
//! driven from a terminal or a script without a GUI toolkit.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use common::{ShellError, ShellResult};
use parking_lot::Mutex;
use ui::dialogs::{AutoDialogs, HostDialogs};
use ui::menu::MenuCommand;
use ui::voice::ChannelRecognizer;
use ui::BrowserWindow;
use url::Url;

use crate::config::ShellConfig;
use crate::engine::{HeadlessDownload, HeadlessEngine};

/// A console command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Type into the current tab's address bar and press Enter.
    Open(String),
    NewTab(Option<String>),
    Close(usize),
    Select(usize),
    Back,
    Forward,
    Reload,
    Bookmark,
    Incognito,
    Engine(String),
    History,
    HistoryOpen(usize),
    Homepage(PathBuf),
    /// Download a URL, optionally under a given file name.
    Download(Url, Option<String>),
    Downloads,
    /// Voice search, optionally with what the user says.
    Voice(Option<String>),
    Tabs,
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> ShellResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name {
        "open" => Command::Open(required(arg, "open <url or search>")?),
        "new" => Command::NewTab(arg),
        "close" => Command::Close(index(rest)?),
        "select" => Command::Select(index(rest)?),
        "back" => Command::Back,
        "forward" => Command::Forward,
        "reload" => Command::Reload,
        "bookmark" => Command::Bookmark,
        "incognito" => Command::Incognito,
        "engine" => Command::Engine(required(arg, "engine <name>")?),
        "history" => Command::History,
        "history-open" => Command::HistoryOpen(index(rest)?),
        "homepage" => Command::Homepage(PathBuf::from(required(arg, "homepage <path>")?)),
        "download" => {
            let arg = required(arg, "download <url> [file]")?;
            let (url, file) = match arg.split_once(char::is_whitespace) {
                Some((url, file)) => (url, Some(file.trim().to_string())),
                None => (arg.as_str(), None),
            };
            Command::Download(Url::parse(url)?, file)
        }
        "downloads" => Command::Downloads,
        "voice" => Command::Voice(arg),
        "tabs" => Command::Tabs,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ShellError::invalid(format!("unknown command: {}", other))),
    };

    Ok(Some(command))
}

fn required(arg: Option<String>, usage: &str) -> ShellResult<String> {
    arg.ok_or_else(|| ShellError::invalid(format!("usage: {}", usage)))
}

fn index(arg: &str) -> ShellResult<usize> {
    arg.parse()
        .map_err(|_| ShellError::invalid(format!("expected a tab or entry number, got {:?}", arg)))
}

const HELP: &str = "commands: open <text>, new [url], close <n>, select <n>, back, forward, reload, \
bookmark, incognito, engine <name>, history, history-open <n>, homepage <path>, \
download <url> [file], downloads, voice [phrase], tabs, quit";

/// What the caller should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    /// Print these lines and keep reading.
    Continue(Vec<String>),
    Quit,
}

/// Dialogs shared between the window and the console.
#[derive(Clone)]
struct SharedDialogs(Arc<Mutex<AutoDialogs>>);

impl HostDialogs for SharedDialogs {
    fn pick_homepage_file(&mut self, filter: &str) -> Option<PathBuf> {
        self.0.lock().pick_homepage_file(filter)
    }

    fn save_file_path(&mut self, suggested: &str) -> Option<PathBuf> {
        self.0.lock().save_file_path(suggested)
    }
}

/// A browser window driven by console commands.
pub struct Console {
    window: BrowserWindow,
    dialogs: SharedDialogs,
    voice: Sender<String>,
}

impl Console {
    /// Build the window on a headless engine.
    pub fn new(config: &ShellConfig) -> Self {
        let dialogs = SharedDialogs(Arc::new(Mutex::new(AutoDialogs::new(
            config.download_dir.clone(),
        ))));
        let (recognizer, voice) = ChannelRecognizer::new();

        let window = BrowserWindow::new(
            Box::new(HeadlessEngine::new(config)),
            Box::new(dialogs.clone()),
            &config.settings(),
        )
        .with_recognizer(Box::new(recognizer));

        Self {
            window,
            dialogs,
            voice,
        }
    }

    pub fn window(&self) -> &BrowserWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut BrowserWindow {
        &mut self.window
    }

    /// Parse and run one input line.
    pub fn run_line(&mut self, line: &str) -> Flow {
        match parse_command(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Flow::Continue(Vec::new()),
            Err(e) => Flow::Continue(vec![e.to_string()]),
        }
    }

    /// Run a command against the window.
    pub fn execute(&mut self, command: Command) -> Flow {
        let window = &mut self.window;
        let mut out = Vec::new();

        match command {
            Command::Open(text) => window.submit_address(&text),
            Command::NewTab(url) => {
                window.new_tab(url.as_deref());
            }
            Command::Close(index) => {
                if index >= window.tabs().count() {
                    out.push(format!("no tab {}", index));
                } else if !window.close_tab(index) {
                    out.push("cannot close the last tab".to_string());
                }
            }
            Command::Select(index) => {
                if !window.select_tab(index) {
                    out.push(format!("no tab {}", index));
                }
            }
            Command::Back => window.go_back(),
            Command::Forward => window.go_forward(),
            Command::Reload => window.reload_page(),
            Command::Bookmark => window.dispatch(MenuCommand::SaveBookmark),
            Command::Incognito => {
                window.toggle_incognito_mode();
                out.push(window.toolbar().incognito_label().to_string());
            }
            Command::Engine(name) => {
                if !window.update_search_engine(&name) {
                    out.push(format!(
                        "search engines: {}",
                        window.toolbar().search_engines().join(", ")
                    ));
                }
            }
            Command::History => {
                for (i, item) in window.toolbar().history_items().iter().enumerate().skip(1) {
                    out.push(format!("{:>3}  {}", i, item));
                }
            }
            Command::HistoryOpen(index) => {
                if window.select_history_item(index).is_none() {
                    out.push(format!("no history entry {}", index));
                }
            }
            Command::Homepage(path) => {
                // A file picker hands back absolute paths.
                let path = if path.is_absolute() {
                    path
                } else {
                    match std::env::current_dir() {
                        Ok(cwd) => cwd.join(path),
                        Err(e) => {
                            out.push(format!("cannot resolve {}: {}", path.display(), e));
                            return Flow::Continue(out);
                        }
                    }
                };
                self.dialogs.0.lock().queue_homepage(&path);
                window.dispatch(MenuCommand::SetCustomHomepage);
            }
            Command::Download(url, file) => {
                let mut request = match file {
                    Some(file) => HeadlessDownload::new(url).with_file_name(file),
                    None => HeadlessDownload::new(url),
                };
                if window.handle_download(&mut request).is_none() {
                    out.push("download cancelled".to_string());
                }
            }
            Command::Downloads => {
                window.dispatch(MenuCommand::DownloadManager);
                if let Some(view) = window.download_window() {
                    out.push(format!("{}:", view.title));
                    out.extend(view.items.iter().map(|item| format!("  {}", item)));
                }
            }
            Command::Voice(phrase) => {
                if let Some(phrase) = phrase {
                    // The window holds the receiver; it is only gone if the
                    // window is.
                    let _ = self.voice.send(phrase);
                }
                window.voice_search();
            }
            Command::Tabs => {
                let current = window.tabs().current_index();
                for (i, tab) in window.tabs().tabs().iter().enumerate() {
                    let marker = if Some(i) == current { '*' } else { ' ' };
                    let url = tab.url().map(|u| u.to_string()).unwrap_or_default();
                    out.push(format!("{} {}  {}  {}", marker, i, tab.title(), url));
                }
            }
            Command::Help => out.push(HELP.to_string()),
            Command::Quit => return Flow::Quit,
        }

        Flow::Continue(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn console(dir: &TempDir) -> Console {
        let config = ShellConfig::new()
            .with_data_dir(dir.path())
            .with_download_dir(Some(dir.path().join("downloads")))
            .with_voice_timeout(Duration::from_millis(20));
        Console::new(&config)
    }

    fn lines(flow: Flow) -> Vec<String> {
        match flow {
            Flow::Continue(lines) => lines,
            Flow::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("  ").unwrap(), None);
        assert_eq!(
            parse_command("open rust book").unwrap(),
            Some(Command::Open("rust book".to_string()))
        );
        assert_eq!(parse_command("new").unwrap(), Some(Command::NewTab(None)));
        assert_eq!(parse_command("close 2").unwrap(), Some(Command::Close(2)));
        assert_eq!(parse_command("voice").unwrap(), Some(Command::Voice(None)));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(
            parse_command("download https://example.com/a.zip").unwrap(),
            Some(Command::Download(Url::parse("https://example.com/a.zip").unwrap(), None))
        );
        assert_eq!(
            parse_command("download https://example.com/a.zip  out.bin").unwrap(),
            Some(Command::Download(
                Url::parse("https://example.com/a.zip").unwrap(),
                Some("out.bin".to_string())
            ))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("open").is_err());
        assert!(parse_command("close x").is_err());
        assert!(parse_command("download not a url").is_err());
        assert!(parse_command("fly").is_err());
    }

    #[test]
    fn test_session() {
        let dir = TempDir::new().unwrap();
        let mut console = console(&dir);

        console.run_line("open https://example.com/");
        console.run_line("bookmark");
        console.run_line("open cats");

        let history = lines(console.run_line("history"));
        assert_eq!(history, vec!["  1  https://example.com/", "  2  cats"]);

        let tabs = lines(console.run_line("tabs"));
        assert_eq!(tabs, vec!["* 0  New Tab  https://www.google.com/search?q=cats"]);

        assert_eq!(console.window().bookmarks().entries(), &["https://example.com/"]);
        assert_eq!(lines(console.run_line("close 0")), vec!["cannot close the last tab"]);
        assert_eq!(console.run_line("quit"), Flow::Quit);
    }

    #[test]
    fn test_close_out_of_range() {
        let dir = TempDir::new().unwrap();
        let mut console = console(&dir);
        console.run_line("new");

        assert_eq!(lines(console.run_line("close 9")), vec!["no tab 9"]);
        assert_eq!(console.window().tabs().count(), 2);

        assert!(lines(console.run_line("close 1")).is_empty());
        assert_eq!(lines(console.run_line("close 0")), vec!["cannot close the last tab"]);
    }

    #[test]
    fn test_incognito_and_engine() {
        let dir = TempDir::new().unwrap();
        let mut console = console(&dir);

        assert_eq!(lines(console.run_line("incognito")), vec!["Incognito Mode (ON)"]);
        assert!(lines(console.run_line("engine DuckDuckGo")).is_empty());
        assert_eq!(
            lines(console.run_line("engine Lycos")),
            vec!["search engines: Google, Bing, DuckDuckGo"]
        );

        console.run_line("new");
        console.run_line("open hidden");
        assert!(console.window().history().is_empty());
        assert_eq!(
            console.window().current_tab().unwrap().url().unwrap().as_str(),
            "https://duckduckgo.com/?q=hidden"
        );
    }

    #[test]
    fn test_homepage_and_downloads() {
        let dir = TempDir::new().unwrap();
        let mut console = console(&dir);
        let page = dir.path().join("home.html");

        console.run_line(&format!("homepage {}", page.display()));
        assert_eq!(console.window().homepage(), page.to_string_lossy());

        console.run_line("download https://example.com/files/report.pdf");
        let out = lines(console.run_line("downloads"));
        assert_eq!(
            out,
            vec![
                "Download Manager:".to_string(),
                format!("  {}", dir.path().join("downloads").join("report.pdf").display()),
            ]
        );
    }

    #[test]
    fn test_download_with_file_name() {
        let dir = TempDir::new().unwrap();
        let mut console = console(&dir);

        console.run_line("download https://example.com/a.zip out.bin");
        let out = lines(console.run_line("downloads"));
        assert_eq!(
            out,
            vec![
                "Download Manager:".to_string(),
                format!("  {}", dir.path().join("downloads").join("out.bin").display()),
            ]
        );
    }

    #[test]
    fn test_relative_homepage() {
        let dir = TempDir::new().unwrap();
        let mut console = console(&dir);

        console.run_line("homepage start.html");
        let expected = std::env::current_dir().unwrap().join("start.html");
        assert_eq!(console.window().homepage(), expected.to_string_lossy());

        console.run_line("new");
        assert_eq!(
            console.window().current_tab().unwrap().url().unwrap(),
            Url::from_file_path(&expected).unwrap()
        );
    }

    #[test]
    fn test_voice() {
        let dir = TempDir::new().unwrap();
        let mut console = console(&dir);

        console.run_line("voice weather tomorrow");
        assert_eq!(
            console.window().current_tab().unwrap().url().unwrap().as_str(),
            "https://www.google.com/search?q=weather+tomorrow"
        );

        // Silence times out and is ignored
        console.run_line("voice");
        assert_eq!(console.window().history().len(), 1);
    }
}
