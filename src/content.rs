//! Fixed text and card tables for every screen of the card.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u8);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub image: &'static str,
    pub alt: &'static str,
    pub message: &'static str,
}

pub static CARDS: [Card; 3] = [
    Card {
        id: CardId(1),
        image: "img1.png",
        alt: "Bow",
        message: "Eshuu Meri Billii, Tum Mery Liye Buhat Special Ho. 💖",
    },
    Card {
        id: CardId(2),
        image: "img3.webp",
        alt: "Hearts",
        message: "Ye Hamza tum sy buhat payar karta hai, I Love You Alote <3✨",
    },
    Card {
        id: CardId(3),
        image: "img2.jpg",
        alt: "Hearts",
        message: "Ye Sepcial Gift, Mery sab sy special shaks ka liyee, My Eshuu 💖",
    },
];

pub fn card(id: CardId) -> Option<&'static Card> {
    CARDS.iter().find(|card| card.id == id)
}

pub const CONFETTI_GLYPHS: [&str; 5] = ["💖", "💝", "💕", "🌸", "✨"];

pub mod hook {
    pub const BADGE: &str = "A Note for You 💌";
    pub const TITLE: &str = "Hey Eshuu Meri Billi 💖";
    pub const LEAD: &str = "I wanted to do something special on your birthday, so I made something special just for you 💖";
    pub const CALL_TO_ACTION: &str = "Click below to see what it is! ✨";
    pub const BUTTON: &str = "Open My Heart 💕";
    pub const FOOTER: &str = "Made with love, only for you 💕";
}

pub mod envelope {
    pub const PROMPT: &str = "Click to open the envelope ✨";
}

pub mod letter {
    pub const HEADING: &str = "A Love Letter 💌";
    pub const SUBTITLE: &str = "From my heart to yours";
    pub const GREETING: &str = "My Sweetest Love";
    pub const PARAGRAPHS: [&str; 3] = [
        "My dearest love, Every moment with you feels like a beautiful dream that I never want to wake up from. I want you to know that you are the most precious person in my life. Every day with you is a gift, and I'm grateful for every second we share together. You make me want to be the best version of myself.",
        "Your smile lights up my world in ways words cannot express. Your laughter is my favorite melody, and your presence brings me a peace I've never known before. Through every high and low, you've been my constant, my anchor, my home.",
        "I promise to cherish you today, tomorrow, and always. To support your dreams, celebrate your victories, and stand by you through challenges. You deserve all the happiness in the world, and I'll spend my life trying to give you just that.",
    ];
    pub const SIGN_OFF: &str = "With all my love, Always yours 💕";
    pub const BUTTON: &str = "Continue To See More ✨";
}

pub mod cards {
    pub const TITLE: &str = "Some Special Cards For You";
    pub const HINT: &str = "Click each card to reveal a special message!";
    pub const FRONT_LABEL: &str = "Tap!";
    pub const FLIP_BACK: &str = "Tap to flip back";
    pub const BUTTON: &str = "Continue to Final Letter 💌";
}

pub mod final_letter {
    pub const HEADING: &str = "Final Love Letter";
    pub const SALUTATION: &str = "My sweetest darling,";
    pub const LINES: [&str; 3] = [
        "You're the calm I reach for and the laugh that brightens my day.",
        "I hope this tiny world made you smile — and whispered how much you mean to me.",
        "I'll keep making memories, big and small, always with you.",
    ];
    pub const CLOSING: &str = "Forever yours, in every little universe.";
    pub const CONFETTI_BUTTON: &str = "Click For Cherish Flowers ✨";
    pub const RESTART_BUTTON: &str = "Restart";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn card_ids_are_unique() {
        let ids: HashSet<CardId> = CARDS.iter().map(|card| card.id).collect();
        assert_eq!(ids.len(), CARDS.len());
    }

    #[test]
    fn card_lookup_by_id() {
        assert_eq!(card(CardId(2)).map(|c| c.image), Some("img3.webp"));
        assert!(card(CardId(9)).is_none());
    }
}
