//! Surah document loading
//!
//! Surah content arrives as a JSON document fetched by an external
//! loader, keyed by a surah identifier:
//!
//! ```json
//! {
//!   "surahName": "...",
//!   "verses": [
//!     {
//!       "verseNumber": 1,
//!       "arabicText": "...",
//!       "translation": "...",
//!       "gestureKey": "index_finger_up",
//!       "gestureName": "..."
//!     }
//!   ]
//! }
//! ```
//!
//! A malformed or empty document is fatal for the session: no partial
//! progression is ever constructed.

use serde::Deserialize;
use tracing::warn;

use hifz_core::{GestureLabel, HifzError, HifzResult, Surah, Verse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurahDocument {
    surah_name: String,
    verses: Vec<VerseRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerseRecord {
    verse_number: u32,
    arabic_text: String,
    translation: String,
    gesture_key: String,
    gesture_name: String,
}

/// Parse a surah document into a validated [`Surah`]
pub fn parse_surah(json: &str) -> HifzResult<Surah> {
    let doc: SurahDocument =
        serde_json::from_str(json).map_err(|e| HifzError::DataLoadFailure(e.to_string()))?;

    let mut verses = Vec::with_capacity(doc.verses.len());
    for (ordinal, record) in doc.verses.into_iter().enumerate() {
        let required_gesture = GestureLabel::from_key(&record.gesture_key).ok_or_else(|| {
            warn!(
                key = %record.gesture_key,
                verse = record.verse_number,
                "unknown gesture key in surah document"
            );
            HifzError::UnknownGestureKey {
                key: record.gesture_key.clone(),
                verse: record.verse_number,
            }
        })?;

        verses.push(Verse {
            ordinal,
            display_id: record.verse_number,
            arabic_text: record.arabic_text,
            translation: record.translation,
            required_gesture,
            gesture_name: record.gesture_name,
        });
    }

    Surah::new(doc.surah_name, verses)
}
