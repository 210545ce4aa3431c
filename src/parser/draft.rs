//! Per-row topic draft.
//!
//! A row is decoded in a fixed order (member, title, info, reply count) and
//! every step fills one slot of a `TopicDraft`. Slots are tracked in the
//! type: a slot that has not been filled holds `Missing`, and `finish` only
//! exists once member, headline and info are all present, so an incomplete
//! topic cannot be built.

use crate::page::Node;
use crate::result::{Member, Topic};

/// Marker for a draft slot that has not been decoded yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Missing;

/// Title and id decoded from the title anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub id: u64,
    pub title: String,
}

/// Node and reply time decoded from the `.fade` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    pub node: Node,
    pub reply_time: String,
}

/// A topic under construction.
#[derive(Debug, Clone)]
pub struct TopicDraft<M = Missing, H = Missing, I = Missing> {
    member: M,
    headline: H,
    info: I,
}

impl TopicDraft {
    #[must_use]
    pub fn new() -> Self {
        Self {
            member: Missing,
            headline: Missing,
            info: Missing,
        }
    }
}

impl Default for TopicDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, I> TopicDraft<Missing, H, I> {
    #[must_use]
    pub fn with_member(self, member: Member) -> TopicDraft<Member, H, I> {
        TopicDraft {
            member,
            headline: self.headline,
            info: self.info,
        }
    }
}

impl<M, I> TopicDraft<M, Missing, I> {
    #[must_use]
    pub fn with_title(self, headline: Headline) -> TopicDraft<M, Headline, I> {
        TopicDraft {
            member: self.member,
            headline,
            info: self.info,
        }
    }
}

impl<M, H> TopicDraft<M, H, Missing> {
    #[must_use]
    pub fn with_info(self, info: Info) -> TopicDraft<M, H, Info> {
        TopicDraft {
            member: self.member,
            headline: self.headline,
            info,
        }
    }
}

impl TopicDraft<Member, Headline, Info> {
    /// Attach the reply count and build the finished topic.
    #[must_use]
    pub fn with_reply_count(self, reply_count: u32) -> Topic {
        Topic {
            id: self.headline.id,
            title: self.headline.title,
            member: self.member,
            node: self.info.node,
            reply_time: self.info.reply_time,
            reply_count,
        }
    }
}
