//! Typed stand-in for the page elements the handlers mutate.
//!
//! `Toast` plays the `emergency-toast` element; `ResultCard` plays
//! `result-card` together with its `risk-level` and `risk-message` children.
//! Every mutation is mirrored as a [`ViewEvent`] so a renderer can follow
//! along without polling.

use std::sync::Arc;

use protocol::style::{HIDDEN_CLASS, RESULT_CARD_CLASS};
use protocol::{CardStyle, RiskAssessment};
use serde::Serialize;
use tokio::sync::{broadcast, RwLock};

pub const CHECKING_TEXT: &str = "Checking...";
pub const CHECK_FAILED_TEXT: &str = "Check failed";

const EVENT_CAPACITY: usize = 64;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub text: String,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub level_text: String,
    pub message: String,
    pub classes: Vec<String>,
}

impl Default for ResultCard {
    fn default() -> Self {
        Self {
            level_text: String::new(),
            message: String::new(),
            classes: vec![RESULT_CARD_CLASS.to_string(), HIDDEN_CLASS.to_string()],
        }
    }
}

impl ResultCard {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|value| value == class)
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class(HIDDEN_CLASS)
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|value| value != class);
    }

    fn reset_classes(&mut self, style: CardStyle) {
        self.classes = vec![
            RESULT_CARD_CLASS.to_string(),
            style.class_name().to_string(),
        ];
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub toast: Toast,
    pub result_card: ResultCard,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    ToastShown {
        text: String,
    },
    ToastHidden,
    ResultPending,
    ResultRendered {
        level_text: String,
        message: String,
        style: CardStyle,
    },
    ResultFailed {
        message: String,
    },
}

#[derive(Clone)]
pub struct ViewHandle {
    state: Arc<RwLock<View>>,
    event_tx: broadcast::Sender<ViewEvent>,
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewHandle {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(View::default())),
            event_tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.event_tx.subscribe()
    }

    pub async fn snapshot(&self) -> View {
        self.state.read().await.clone()
    }

    pub async fn toast(&self) -> Toast {
        self.state.read().await.toast.clone()
    }

    pub async fn result_card(&self) -> ResultCard {
        self.state.read().await.result_card.clone()
    }

    pub async fn show_toast(&self, text: String) {
        {
            let mut view = self.state.write().await;
            view.toast.text = text.clone();
            view.toast.visible = true;
        }
        self.emit(ViewEvent::ToastShown { text });
    }

    /// Hides the toast but keeps its text, like adding `hidden` back.
    pub async fn hide_toast(&self) {
        {
            let mut view = self.state.write().await;
            view.toast.visible = false;
        }
        self.emit(ViewEvent::ToastHidden);
    }

    /// Shows the placeholder. Earlier style classes stay on the card until a
    /// result replaces them.
    pub async fn begin_check(&self) {
        {
            let mut view = self.state.write().await;
            let card = &mut view.result_card;
            card.level_text = CHECKING_TEXT.to_string();
            card.message.clear();
            card.remove_class(HIDDEN_CLASS);
        }
        self.emit(ViewEvent::ResultPending);
    }

    pub async fn render_result(&self, assessment: &RiskAssessment) {
        let level_text = assessment.level_text();
        let message = assessment.message_text().to_string();
        let style = assessment.style();
        {
            let mut view = self.state.write().await;
            let card = &mut view.result_card;
            card.level_text = level_text.clone();
            card.message = message.clone();
            card.reset_classes(style);
        }
        self.emit(ViewEvent::ResultRendered {
            level_text,
            message,
            style,
        });
    }

    pub async fn render_failure(&self, message: &str) {
        {
            let mut view = self.state.write().await;
            let card = &mut view.result_card;
            card.level_text = CHECK_FAILED_TEXT.to_string();
            card.message = message.to_string();
            card.reset_classes(CardStyle::default());
        }
        self.emit(ViewEvent::ResultFailed {
            message: message.to_string(),
        });
    }

    fn emit(&self, event: ViewEvent) {
        // No subscribers is fine: nobody is drawing.
        let _ = self.event_tx.send(event);
    }
}
