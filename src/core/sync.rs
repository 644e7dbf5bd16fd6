//! Offline/sync state derived from scroll progress, and the decorative
//! queue counter that follows it.

use std::time::Duration;

use serde::Serialize;

/// Connectivity state shown by the sync widgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum SyncState {
    #[default]
    #[display("Offline")]
    Offline,
    #[display("Syncing...")]
    Syncing,
    #[display("Online")]
    Online,
}

impl SyncState {
    pub fn accent(self) -> Accent {
        match self {
            SyncState::Offline => Accent::Danger,
            SyncState::Syncing => Accent::Warning,
            SyncState::Online => Accent::Success,
        }
    }

    /// Relative speed of decorative particles.
    pub fn particle_speed(self) -> f64 {
        match self {
            SyncState::Offline => 0.5,
            SyncState::Syncing => 2.0,
            SyncState::Online => 0.2,
        }
    }

    /// How often the queue counter moves while in this state.
    pub fn tick_interval(self) -> Option<Duration> {
        match self {
            SyncState::Offline => Some(Duration::from_millis(600)),
            SyncState::Syncing => Some(Duration::from_millis(400)),
            SyncState::Online => None,
        }
    }
}

/// Progress thresholds, in percent, at which a widget changes state.
///
/// Lower bounds are inclusive: progress equal to `syncing_at` is already
/// syncing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdTable {
    pub syncing_at: f64,
    pub online_at: f64,
}

impl ThresholdTable {
    pub const DEFAULT: Self = Self::new(15.0, 90.0);
    /// Sync engine card: short offline build-up, long drain.
    pub const SYNC_ENGINE: Self = Self::DEFAULT;

    pub const fn new(syncing_at: f64, online_at: f64) -> Self {
        Self {
            syncing_at,
            online_at,
        }
    }

    pub fn state_for(&self, progress: f64) -> SyncState {
        if progress < self.syncing_at {
            SyncState::Offline
        } else if progress < self.online_at {
            SyncState::Syncing
        } else {
            SyncState::Online
        }
    }

    /// Number of pending packets shown at `progress`.
    ///
    /// Packets pile up across the offline band, drain across the syncing
    /// band and are gone once online.
    pub fn packet_count(&self, progress: f64) -> usize {
        let max = QueueCounter::MAX as f64;
        let count = match self.state_for(progress) {
            SyncState::Offline => (progress.max(0.0) * max / self.syncing_at).floor().min(max),
            SyncState::Syncing => {
                let band = self.online_at - self.syncing_at;
                let drained = ((progress - self.syncing_at) * (max + 1.0) / band).floor();
                (max - drained).max(0.0)
            }
            SyncState::Online => 0.0,
        };
        count as usize
    }

    /// The packets pending at `progress`, oldest first.
    pub fn pending_packets(&self, progress: f64) -> &'static [Packet] {
        &SAMPLE_PACKETS[..self.packet_count(progress).min(SAMPLE_PACKETS.len())]
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bounded count of queued items, moved one step per timer tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueCounter {
    value: u8,
}

impl QueueCounter {
    pub const MAX: u8 = 6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u8) -> Self {
        Self {
            value: value.min(Self::MAX),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Apply the entry rule of a state. Going offline starts a fresh queue;
    /// going online flushes it.
    pub fn enter(&mut self, state: SyncState) {
        match state {
            SyncState::Offline | SyncState::Online => self.value = 0,
            SyncState::Syncing => {}
        }
    }

    /// Advance one timer tick in `state`.
    pub fn tick(&mut self, state: SyncState) {
        self.value = match state {
            SyncState::Offline => (self.value + 1).min(Self::MAX),
            SyncState::Syncing => self.value.saturating_sub(1),
            SyncState::Online => 0,
        };
    }
}

/// Colour family for a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Danger,
    Warning,
    Success,
}

impl Accent {
    pub fn hex(self) -> &'static str {
        match self {
            Accent::Danger => "#F43F5E",
            Accent::Warning => "#F59E0B",
            Accent::Success => "#10B981",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Danger => "text-rose-500",
            Accent::Warning => "text-amber-500",
            Accent::Success => "text-emerald-500",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Accent::Danger => "bg-rose-500",
            Accent::Warning => "bg-amber-500",
            Accent::Success => "bg-emerald-500",
        }
    }

    pub fn soft_bg_class(self) -> &'static str {
        match self {
            Accent::Danger => "bg-rose-500/10",
            Accent::Warning => "bg-amber-500/10",
            Accent::Success => "bg-emerald-500/10",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Accent::Danger => "bg-rose-500/5 border-rose-500/20",
            Accent::Warning => "bg-amber-500/5 border-amber-500/20",
            Accent::Success => "bg-emerald-500/5 border-emerald-500/20",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Accent::Danger => "shadow-[0_10px_30px_-10px_rgba(244,63,94,0.15)] border-rose-500/20",
            Accent::Warning => "shadow-[0_10px_30px_-10px_rgba(245,158,11,0.15)] border-amber-500/20",
            Accent::Success => {
                "shadow-[0_10px_30px_-10px_rgba(16,185,129,0.15)] border-emerald-500/20"
            }
        }
    }
}

/// A queued file shown in the sync engine card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Packet {
    pub name: &'static str,
    pub size: &'static str,
}

pub const SAMPLE_PACKETS: [Packet; 6] = [
    Packet {
        name: "User_Profile_v2.json",
        size: "12kb",
    },
    Packet {
        name: "Daily_Route_Logs.db",
        size: "1.4mb",
    },
    Packet {
        name: "Visit_Checkin_04.enc",
        size: "48kb",
    },
    Packet {
        name: "Site_Photo_HighRes.jpg",
        size: "3.2mb",
    },
    Packet {
        name: "GPS_Telemetry_Batch.csv",
        size: "128kb",
    },
    Packet {
        name: "Field_Notes_Audio.aac",
        size: "850kb",
    },
];

/// Round progress for display, e.g. `"42%"`.
pub fn percent_label(progress: f64) -> String {
    format!("{}%", progress.clamp(0.0, 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(SyncState::Offline.to_string(), "Offline");
        assert_eq!(SyncState::Syncing.to_string(), "Syncing...");
        assert_eq!(SyncState::Online.to_string(), "Online");
    }

    #[test]
    fn test_packet_count_builds_up_offline() {
        let table = ThresholdTable::DEFAULT;
        assert_eq!(table.packet_count(0.0), 0);
        assert_eq!(table.packet_count(2.5), 1);
        assert_eq!(table.packet_count(7.5), 3);
        assert_eq!(table.packet_count(14.9), 5);
    }

    #[test]
    fn test_packet_count_drains_while_syncing() {
        let table = ThresholdTable::DEFAULT;
        assert_eq!(table.packet_count(15.0), 6);
        assert_eq!(table.packet_count(26.0), 5);
        assert_eq!(table.packet_count(52.5), 3);
        assert_eq!(table.packet_count(89.9), 0);
        assert_eq!(table.packet_count(95.0), 0);
    }

    #[test]
    fn test_pending_packets_in_order() {
        let packets = ThresholdTable::DEFAULT.pending_packets(15.0);
        assert_eq!(packets.len(), 6);
        assert_eq!(packets[0].name, "User_Profile_v2.json");
        assert_eq!(packets[5].name, "Field_Notes_Audio.aac");
    }

    #[test]
    fn test_entering_states() {
        let mut counter = QueueCounter::with_value(4);

        counter.enter(SyncState::Syncing);
        assert_eq!(counter.value(), 4);

        counter.enter(SyncState::Offline);
        assert_eq!(counter.value(), 0);

        let mut counter = QueueCounter::with_value(4);
        counter.enter(SyncState::Online);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_online_tick_flushes() {
        let mut counter = QueueCounter::with_value(3);
        counter.tick(SyncState::Online);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_with_value_clamps() {
        assert_eq!(QueueCounter::with_value(40).value(), QueueCounter::MAX);
    }

    #[test]
    fn test_intervals_and_speeds() {
        assert_eq!(
            SyncState::Offline.tick_interval(),
            Some(Duration::from_millis(600))
        );
        assert_eq!(
            SyncState::Syncing.tick_interval(),
            Some(Duration::from_millis(400))
        );
        assert_eq!(SyncState::Online.tick_interval(), None);
        assert!(SyncState::Syncing.particle_speed() > SyncState::Offline.particle_speed());
        assert!(SyncState::Online.particle_speed() < SyncState::Offline.particle_speed());
    }

    #[test]
    fn test_accents() {
        assert_eq!(SyncState::Offline.accent(), Accent::Danger);
        assert_eq!(SyncState::Syncing.accent().text_class(), "text-amber-500");
        assert_eq!(SyncState::Online.accent().dot_class(), "bg-emerald-500");
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(41.6), "42%");
        assert_eq!(percent_label(140.0), "100%");
    }
}
