//! Seed data for the prototype.
//!
//! The store starts from these values. Message timestamps are relative to the
//! start time passed in so the transcript shows a plausible history.

use crate::model::{
    AudioSettings, BluetoothDevice, DeviceStatus, Language, LanguagePair, Message, RoomStats, User,
};

const MINUTE_MS: u64 = 60_000;

/// The local user.
pub fn user() -> User {
    User {
        id: "u1".into(),
        name: "Ahmet Yılmaz".into(),
        email: "ahmet@example.com".into(),
        avatar: "https://picsum.photos/seed/me/200/200".into(),
    }
}

/// Usage statistics.
pub fn stats() -> RoomStats {
    RoomStats {
        total_talk_time: "42h 15m".into(),
        rooms_created: 18,
        favorite_pair: "TR ↔ EN".into(),
    }
}

/// Default conversation languages.
pub fn language_pair() -> LanguagePair {
    LanguagePair { from: Language::Tr, to: Language::En }
}

/// Default audio settings.
pub fn audio_settings() -> AudioSettings {
    AudioSettings {
        speaker_volume: 75,
        mic_sensitivity: 80,
        echo_cancellation: true,
        noise_reduction: true,
    }
}

/// Discovered devices: one connected, two available.
pub fn devices() -> Vec<BluetoothDevice> {
    vec![
        BluetoothDevice {
            id: "1".into(),
            name: "AirPods Pro".into(),
            status: DeviceStatus::Connected,
            battery: Some(85),
        },
        BluetoothDevice {
            id: "2".into(),
            name: "JBL Flip 5".into(),
            status: DeviceStatus::Available,
            battery: None,
        },
        BluetoothDevice {
            id: "3".into(),
            name: "Sony WH-1000XM4".into(),
            status: DeviceStatus::Available,
            battery: Some(40),
        },
    ]
}

/// Three-message conversation ending three minutes before `now_ms`.
pub fn messages(now_ms: u64) -> Vec<Message> {
    let ahmet = |id: &str, minutes_ago: u64, original: &str, translated: &str| Message {
        id: id.into(),
        sender_id: "user1".into(),
        sender_name: "Ahmet Y.".into(),
        avatar: "https://picsum.photos/seed/user1/40/40".into(),
        text_original: original.into(),
        text_translated: translated.into(),
        timestamp_ms: now_ms.saturating_sub(minutes_ago * MINUTE_MS),
        language: Language::Tr,
        is_me: true,
    };

    vec![
        ahmet("1", 5, "Merhaba, nasılsın?", "Hello, how are you?"),
        Message {
            id: "2".into(),
            sender_id: "user2".into(),
            sender_name: "John D.".into(),
            avatar: "https://picsum.photos/seed/user2/40/40".into(),
            text_original: "I'm good, thanks! And you?".into(),
            text_translated: "İyiyim, teşekkürler! Ya sen?".into(),
            timestamp_ms: now_ms.saturating_sub(4 * MINUTE_MS),
            language: Language::En,
            is_me: false,
        },
        ahmet(
            "3",
            3,
            "Ben de iyiyim. Proje nasıl gidiyor?",
            "I am also good. How is the project going?",
        ),
    ]
}
