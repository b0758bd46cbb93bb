use std::collections::{BTreeSet, HashMap};

use log::{debug, info, warn};

use crate::content::{self, CardId, CARDS};

/// How long the confetti burst stays on screen.
pub const CONFETTI_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Hook,
    Envelope,
    Letter,
    Cards,
    FinalLetter,
}

impl Page {
    pub fn number(self) -> u8 {
        match self {
            Page::Hook => 1,
            Page::Envelope => 2,
            Page::Letter => 3,
            Page::Cards => 4,
            Page::FinalLetter => 5,
        }
    }

    pub fn next(self) -> Option<Page> {
        match self {
            Page::Hook => Some(Page::Envelope),
            Page::Envelope => Some(Page::Letter),
            Page::Letter => Some(Page::Cards),
            Page::Cards => Some(Page::FinalLetter),
            Page::FinalLetter => None,
        }
    }
}

/// Snapshot of the confetti generation, handed to the clear timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfettiTicket {
    generation: u64,
}

#[derive(Default)]
struct CardBoard {
    flipped: HashMap<CardId, bool>,
    discovered: BTreeSet<CardId>,
}

pub struct Sequencer {
    page: Page,
    cards: CardBoard,
    confetti_visible: bool,
    confetti_generation: u64,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            page: Page::Hook,
            cards: CardBoard::default(),
            confetti_visible: false,
            confetti_generation: 0,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn confetti_visible(&self) -> bool {
        self.confetti_visible
    }

    /// Moves one page forward. Stays put on the last page.
    pub fn advance(&mut self) -> Page {
        match self.page.next() {
            Some(next) => {
                info!("Page {} -> {}", self.page.number(), next.number());
                self.page = next;
                if next == Page::Cards {
                    self.cards = CardBoard::default();
                }
            }
            None => warn!("Ignoring advance past page {}", self.page.number()),
        }
        self.page
    }

    pub fn reset(&mut self) {
        info!("Restarting from page {}", self.page.number());
        self.page = Page::Hook;
        self.cards = CardBoard::default();
        self.confetti_visible = false;
        self.confetti_generation += 1;
    }

    pub fn trigger_confetti(&mut self) -> ConfettiTicket {
        self.confetti_generation += 1;
        self.confetti_visible = true;
        debug!("Confetti on (generation {})", self.confetti_generation);
        ConfettiTicket {
            generation: self.confetti_generation,
        }
    }

    /// Clears the confetti if `ticket` is still current. Returns whether it did.
    pub fn expire_confetti(&mut self, ticket: ConfettiTicket) -> bool {
        if ticket.generation != self.confetti_generation {
            debug!(
                "Stale confetti timer (generation {}, current {})",
                ticket.generation, self.confetti_generation
            );
            return false;
        }
        self.confetti_visible = false;
        debug!("Confetti off (generation {})", ticket.generation);
        true
    }

    pub fn toggle_card(&mut self, id: CardId) {
        if content::card(id).is_none() {
            warn!("Ignoring toggle of unknown card {:?}", id);
            return;
        }
        let flipped = self.cards.flipped.entry(id).or_insert(false);
        *flipped = !*flipped;
        if *flipped {
            self.cards.discovered.insert(id);
        }
        debug!(
            "Card {} flipped={} discovered={}/{}",
            id.0,
            *flipped,
            self.cards.discovered.len(),
            CARDS.len()
        );
    }

    pub fn is_flipped(&self, id: CardId) -> bool {
        self.cards.flipped.get(&id).copied().unwrap_or(false)
    }

    pub fn is_discovered(&self, id: CardId) -> bool {
        self.cards.discovered.contains(&id)
    }

    pub fn discovered_count(&self) -> usize {
        self.cards.discovered.len()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.discovered.len() == CARDS.len()
    }

    /// Leaves the card screen once every card has been discovered.
    pub fn advance_from_cards(&mut self) -> bool {
        if self.page != Page::Cards || !self.is_complete() {
            warn!(
                "Ignoring advance from cards on page {} with {}/{} discovered",
                self.page.number(),
                self.discovered_count(),
                CARDS.len()
            );
            return false;
        }
        self.advance();
        true
    }

    pub fn progress_percent(&self) -> f64 {
        self.discovered_count() as f64 / CARDS.len() as f64 * 100.0
    }

    pub fn status_text(&self) -> String {
        let found = self.discovered_count();
        let total = CARDS.len();
        if found == 0 {
            "Start by tapping any card above ✨".to_string()
        } else if found < total {
            format!("{} of {} messages discovered! Keep exploring 💖", found, total)
        } else {
            "You've found them all! Click \"Continue\" to read my final letter.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_cards() -> Sequencer {
        let mut seq = Sequencer::new();
        for _ in 0..3 {
            seq.advance();
        }
        assert_eq!(seq.page(), Page::Cards);
        seq
    }

    #[test]
    fn starts_on_first_page_with_nothing_discovered() {
        let seq = Sequencer::new();
        assert_eq!(seq.page().number(), 1);
        assert_eq!(seq.discovered_count(), 0);
        assert!(!seq.confetti_visible());
        assert!(!seq.is_complete());
    }

    #[test]
    fn advance_walks_pages_in_order_and_stops_at_last() {
        let mut seq = Sequencer::new();
        let visited: Vec<u8> = (0..6).map(|_| seq.advance().number()).collect();
        assert_eq!(visited, vec![2, 3, 4, 5, 5, 5]);
    }

    #[test]
    fn toggling_twice_keeps_card_discovered_once() {
        let mut seq = on_cards();
        seq.toggle_card(CardId(1));
        assert!(seq.is_flipped(CardId(1)));
        seq.toggle_card(CardId(1));
        assert!(!seq.is_flipped(CardId(1)));
        seq.toggle_card(CardId(1));
        assert!(seq.is_flipped(CardId(1)));
        assert!(seq.is_discovered(CardId(1)));
        assert_eq!(seq.discovered_count(), 1);
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut seq = on_cards();
        seq.toggle_card(CardId(42));
        assert!(!seq.is_flipped(CardId(42)));
        assert_eq!(seq.discovered_count(), 0);
    }

    #[test]
    fn completion_requires_every_card_and_sticks() {
        let mut seq = on_cards();
        seq.toggle_card(CardId(1));
        seq.toggle_card(CardId(2));
        assert!(!seq.is_complete());
        assert!(!seq.advance_from_cards());
        assert_eq!(seq.page(), Page::Cards);

        seq.toggle_card(CardId(3));
        assert!(seq.is_complete());
        for id in 1..=3 {
            seq.toggle_card(CardId(id));
        }
        assert!(seq.is_complete());

        assert!(seq.advance_from_cards());
        assert_eq!(seq.page(), Page::FinalLetter);
    }

    #[test]
    fn advance_from_cards_only_works_on_card_screen() {
        let mut seq = Sequencer::new();
        assert!(!seq.advance_from_cards());
        assert_eq!(seq.page(), Page::Hook);
    }

    #[test]
    fn confetti_clears_when_its_timer_fires() {
        let mut seq = Sequencer::new();
        let ticket = seq.trigger_confetti();
        assert!(seq.confetti_visible());
        assert!(seq.expire_confetti(ticket));
        assert!(!seq.confetti_visible());
    }

    #[test]
    fn reset_neutralizes_pending_confetti_timer() {
        let mut seq = Sequencer::new();
        let stale = seq.trigger_confetti();
        seq.reset();
        assert!(!seq.confetti_visible());

        let fresh = seq.trigger_confetti();
        assert!(!seq.expire_confetti(stale));
        assert!(seq.confetti_visible());
        assert!(seq.expire_confetti(fresh));
    }

    #[test]
    fn retrigger_extends_confetti() {
        let mut seq = Sequencer::new();
        let first = seq.trigger_confetti();
        let second = seq.trigger_confetti();
        assert!(!seq.expire_confetti(first));
        assert!(seq.confetti_visible());
        assert!(seq.expire_confetti(second));
    }

    #[test]
    fn reset_clears_cards_and_page() {
        let mut seq = on_cards();
        seq.toggle_card(CardId(2));
        seq.reset();
        assert_eq!(seq.page(), Page::Hook);
        assert_eq!(seq.discovered_count(), 0);
        assert!(!seq.is_flipped(CardId(2)));
    }

    #[test]
    fn full_walkthrough_with_confetti_and_restart() {
        let mut seq = Sequencer::new();
        for _ in 0..4 {
            seq.advance();
        }
        assert_eq!(seq.page().number(), 5);
        let ticket = seq.trigger_confetti();
        assert!(seq.confetti_visible());
        seq.expire_confetti(ticket);
        assert!(!seq.confetti_visible());
        seq.reset();
        assert_eq!(seq.page().number(), 1);
    }

    #[test]
    fn status_text_and_progress_follow_discovery() {
        let mut seq = on_cards();
        assert_eq!(seq.status_text(), "Start by tapping any card above ✨");
        assert_eq!(seq.progress_percent(), 0.0);

        seq.toggle_card(CardId(3));
        assert_eq!(seq.status_text(), "1 of 3 messages discovered! Keep exploring 💖");

        seq.toggle_card(CardId(1));
        seq.toggle_card(CardId(2));
        assert!(seq.status_text().starts_with("You've found them all!"));
        assert_eq!(seq.progress_percent(), 100.0);
    }
}
