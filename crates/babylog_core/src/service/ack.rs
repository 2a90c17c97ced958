//! Transient user-facing acknowledgements.
//!
//! View-models publish an `Acknowledgement` after successful add/save
//! actions; presentation layers drain the receiving end of the channel and
//! render them however they like.

use log::debug;
use std::sync::mpsc::{self, Receiver, Sender};

/// What the acknowledgement confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckKind {
    ProfileSaved,
    MilestoneAdded,
    FoodLogged,
}

impl AckKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::ProfileSaved => "Saved",
            Self::MilestoneAdded => "Milestone added",
            Self::FoodLogged => "Logged",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ProfileSaved => "You've got this. Profile updated!",
            Self::MilestoneAdded => "Small wins matter.",
            Self::FoodLogged => "New food added to baby's tasting journey!",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::ProfileSaved => "profile_saved",
            Self::MilestoneAdded => "milestone_added",
            Self::FoodLogged => "food_logged",
        }
    }
}

/// One toast-style confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub kind: AckKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<AckKind> for Acknowledgement {
    fn from(kind: AckKind) -> Self {
        Self {
            kind,
            title: kind.title(),
            description: kind.description(),
        }
    }
}

/// Creates a connected acknowledgement channel.
pub fn ack_channel() -> (AckSender, Receiver<Acknowledgement>) {
    let (tx, rx) = mpsc::channel();
    (AckSender { tx: Some(tx) }, rx)
}

/// Publishing half held by view-models.
///
/// A detached sender silently drops everything, which keeps view-models
/// usable without any subscriber.
#[derive(Debug, Clone, Default)]
pub struct AckSender {
    tx: Option<Sender<Acknowledgement>>,
}

impl AckSender {
    pub fn detached() -> Self {
        Self::default()
    }

    pub(crate) fn notify(&self, kind: AckKind) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(kind.into()).is_err() {
            debug!(
                "event=ack_dropped module=service status=no_subscriber kind={}",
                kind.label()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ack_channel, AckKind, AckSender};

    #[test]
    fn subscriber_receives_published_acks_in_order() {
        let (sender, receiver) = ack_channel();
        sender.notify(AckKind::MilestoneAdded);
        sender.notify(AckKind::ProfileSaved);

        let titles: Vec<_> = receiver.try_iter().map(|ack| ack.title).collect();
        assert_eq!(titles, ["Milestone added", "Saved"]);
    }

    #[test]
    fn publishing_without_subscriber_is_harmless() {
        AckSender::detached().notify(AckKind::FoodLogged);

        let (sender, receiver) = ack_channel();
        drop(receiver);
        sender.notify(AckKind::FoodLogged);
    }
}
