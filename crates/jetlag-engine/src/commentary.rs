//! Informal remarks attached to unusual inputs.
//!
//! The planner decides *when* a remark applies; this module only owns the
//! copy, keyed by [`Remark`].

use crate::flight::InvalidReason;
use crate::format::one_decimal;

/// A condition that earns a set of informal remarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remark {
    NegativeDuration,
    TooLong,
    UnrealisticRoute,
    ExcessiveSleep { hours: f64 },
    UltraLongHaul,
}

impl From<InvalidReason> for Remark {
    fn from(reason: InvalidReason) -> Self {
        match reason {
            InvalidReason::NegativeDuration => Remark::NegativeDuration,
            InvalidReason::TooLong => Remark::TooLong,
            InvalidReason::UnrealisticRoute => Remark::UnrealisticRoute,
        }
    }
}

impl Remark {
    /// The remark lines for this condition.
    pub fn lines(&self) -> Vec<String> {
        match *self {
            Remark::ExcessiveSleep { hours } => vec![
                format!(
                    "😴 Whoa there, Sleeping Beauty! {} hours of sleep? Are you part bear preparing for hibernation?",
                    one_decimal(hours)
                ),
                "🛏️ That's not a sleep schedule, that's a lifestyle choice! Maybe consider becoming a professional sleeper?".to_string(),
                format!(
                    "⏰ Fun fact: You'd be awake for only {} hours a day. That's barely enough time to eat!",
                    one_decimal(24.0 - hours)
                ),
                "🐨 Even koalas are jealous of your sleep game (they only sleep 18-22 hours... wait, never mind).".to_string(),
                "💤 Pro tip: With that much sleep, jet lag might actually improve your schedule!".to_string(),
            ],
            other => fixed_lines(other).iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn fixed_lines(remark: Remark) -> &'static [&'static str] {
    match remark {
        Remark::NegativeDuration => &[
            "🤨 Hold up! Did you just invent time travel? Your arrival is BEFORE your departure!",
            "⏰ Unless you've mastered the art of time manipulation, this flight is physically impossible.",
            "🚀 Are you flying backwards in time? That's some next-level transportation!",
            "📅 Pro tip: Check your dates again - even the fastest jets can't go back in time!",
            "🎭 This isn't Back to the Future, Doc! Please check your departure and arrival times.",
        ],
        Remark::TooLong => &[
            "🛳️ Are you sure this isn't a cruise ship? That's longer than any commercial flight!",
            "🗺️ Even with multiple connections, this seems suspiciously long...",
            "🤔 Double-check your dates - you might have selected the wrong arrival day!",
            "✈️ The longest flight in the world is only ~19 hours. This is... ambitious!",
        ],
        Remark::UnrealisticRoute => &[
            "🤨 This flight duration seems unrealistic for the timezone difference...",
            "🛩️ Are you taking a scenic route via Mars? Check your flight details!",
            "📍 Double-check if you have layovers or if this includes ground transportation time.",
        ],
        Remark::UltraLongHaul => &[
            "✈️ Ultra long-haul flight! You're basically moving your home address temporarily.",
            "🎬 Perfect time to binge-watch an entire TV series... or two!",
            "🧘‍♀️ You'll have enough time to achieve enlightenment through meditation.",
            "📚 Bring a library - you'll have time to become an expert in any subject!",
        ],
        Remark::ExcessiveSleep { .. } => &[],
    }
}
