//! High-score persistence.
//!
//! The best score lives outside the game state; the session loads it once at
//! startup and saves it whenever a tick beats it.

use log::warn;

/// localStorage key, shared with earlier versions of the page.
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

pub trait HighScoreStore {
    /// Stored best score, 0 when nothing is stored.
    fn load(&self) -> u32;
    fn save(&mut self, score: u32);
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) {
        (**self).save(score)
    }
}

/// Volatile store, used natively and when the browser refuses storage access.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    writes: usize,
}

impl MemoryStore {
    pub fn with_score(score: u32) -> Self {
        Self {
            value: Some(score),
            writes: 0,
        }
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, score: u32) {
        self.value = Some(score);
        self.writes += 1;
    }
}

/// `window.localStorage` backed store.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
    key: &'static str,
}

impl LocalStorageStore {
    /// `None` when there is no window or storage is disabled (e.g. privacy mode).
    pub fn open() -> Option<Self> {
        Self::open_with_key(HIGH_SCORE_KEY)
    }

    pub fn open_with_key(key: &'static str) -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage, key })
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> u32 {
        match self.storage.get_item(self.key) {
            Ok(Some(raw)) => parse_score(&raw).unwrap_or_else(|| {
                warn!("ignoring unreadable high score {raw:?}");
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                warn!("reading high score failed: {err:?}");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Err(err) = self.storage.set_item(self.key, &score.to_string()) {
            warn!("saving high score failed: {err:?}");
        }
    }
}

/// Stored values are decimal strings. Older pages may have written a float.
pub fn parse_score(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| v as u32)
    })
}

/// Best score seen so far plus the store it is persisted in.
pub struct HighScore<S> {
    best: u32,
    store: S,
}

impl<S: HighScoreStore> HighScore<S> {
    pub fn load(store: S) -> Self {
        let best = store.load();
        Self { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record `score`; saves and returns `true` only when it beats the best.
    pub fn observe(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            self.store.save(score);
            true
        } else {
            false
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
