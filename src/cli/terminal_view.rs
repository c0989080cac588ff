//! Terminal view adapter

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Notice, View};
use crate::domain::item::{ItemId, ItemKind};

use super::presenter::Presenter;

/// View backed by the terminal.
///
/// The "checked" items are whatever the command line named. Confirmations
/// and prompts read a line from stdin unless answers were supplied up front.
pub struct TerminalView {
    presenter: Presenter,
    checked: Vec<(ItemKind, ItemId)>,
    assume_yes: bool,
    favorites: Mutex<HashMap<(ItemKind, ItemId), bool>>,
}

impl TerminalView {
    pub fn new(presenter: Presenter) -> Self {
        Self {
            presenter,
            checked: Vec::new(),
            assume_yes: false,
            favorites: Mutex::new(HashMap::new()),
        }
    }

    /// Items to report as checked
    pub fn with_checked(mut self, checked: Vec<(ItemKind, ItemId)>) -> Self {
        self.checked = checked;
        self
    }

    /// Answer every confirmation with yes
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    async fn read_line(question: String) -> Option<String> {
        tokio::task::spawn_blocking(move || {
            eprint!("{} ", question);
            let _ = io::stderr().flush();
            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => None,
                Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            }
        })
        .await
        .ok()
        .flatten()
    }
}

#[async_trait]
impl View for TerminalView {
    async fn checked_items(&self) -> Vec<(ItemKind, ItemId)> {
        self.checked.clone()
    }

    async fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match Self::read_line(format!("{} [y/N]", message)).await {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        Self::read_line(message.to_string()).await
    }

    async fn notify(&self, message: &str, notice: Notice) {
        match notice {
            Notice::Info => self.presenter.info(message),
            Notice::Success => self.presenter.success(message),
            Notice::Error => self.presenter.error(message),
        }
    }

    /// Known only for items this run has seen the server report on
    async fn is_favorite(&self, kind: ItemKind, id: &ItemId) -> Option<bool> {
        self.favorites
            .lock()
            .ok()
            .and_then(|f| f.get(&(kind, id.clone())).copied())
    }

    async fn set_favorite(&self, kind: ItemKind, id: &ItemId, favorited: Option<bool>) {
        if let Ok(mut favorites) = self.favorites.lock() {
            match favorited {
                Some(state) => favorites.insert((kind, id.clone()), state),
                None => favorites.remove(&(kind, id.clone())),
            };
        }
        self.presenter
            .favorite(&format!("{} {}", kind.label(), id), favorited);
    }

    async fn refresh(&self) {
        debug!("view refresh requested");
        self.presenter.success("Done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assume_yes_skips_stdin() {
        let view = TerminalView::new(Presenter::new()).assume_yes(true);
        assert!(view.confirm("Delete?").await);
    }

    #[tokio::test]
    async fn checked_items_come_from_command_line() {
        let items = vec![(ItemKind::Folder, ItemId::from(5))];
        let view = TerminalView::new(Presenter::new()).with_checked(items.clone());
        assert_eq!(view.checked_items().await, items);
    }

    #[tokio::test]
    async fn favorite_state_unknown_until_reported() {
        let view = TerminalView::new(Presenter::new());
        let id = ItemId::from(1);
        assert_eq!(view.is_favorite(ItemKind::Document, &id).await, None);
        view.set_favorite(ItemKind::Document, &id, Some(true)).await;
        assert_eq!(view.is_favorite(ItemKind::Document, &id).await, Some(true));
        view.set_favorite(ItemKind::Document, &id, None).await;
        assert_eq!(view.is_favorite(ItemKind::Document, &id).await, None);
    }
}
