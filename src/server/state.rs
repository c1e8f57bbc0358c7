//! Server shared state
//!
//! Holds configuration, the guide tracker and the injected collaborators.

use crate::classify::command::CommandClassifier;
use crate::classify::{Classification, Classifier};
use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::landmark::Gazetteer;
use crate::speech::audio::AudioStore;
use crate::speech::command::CommandSynthesizer;
use crate::speech::Synthesizer;
use crate::tracker::{InertStatus, LandmarkStatus, MarkOutcome, Ranking, Recognition, Tracker};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Visitation and recognition state
    tracker: RwLock<Tracker>,

    /// Text-to-speech backend
    synthesizer: Arc<dyn Synthesizer>,

    /// Image classifier backend
    classifier: Arc<dyn Classifier>,

    /// Generated audio clips
    audio: AudioStore,

    started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state from configuration, with command-backed collaborators
    pub fn new(config: Config) -> Result<Self> {
        let gazetteer = config.gazetteer()?;
        let synthesizer = Arc::new(CommandSynthesizer::new(&config.speech));
        let classifier = Arc::new(CommandClassifier::new(&config.classifier));
        Ok(Self::with_collaborators(config, gazetteer, synthesizer, classifier))
    }

    /// Create state with explicit collaborators
    pub fn with_collaborators(
        config: Config,
        gazetteer: Gazetteer,
        synthesizer: Arc<dyn Synthesizer>,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        let audio = AudioStore::new(&config.server.static_dir);
        Self {
            config,
            tracker: RwLock::new(Tracker::new(gazetteer)),
            synthesizer,
            classifier,
            audio,
            started_at: Utc::now(),
        }
    }

    /// Rank nearest unvisited landmarks using the configured count
    pub async fn rank(&self, current: Coordinates) -> Ranking {
        self.tracker
            .read()
            .await
            .rank_nearest_unvisited(current, self.config.guide.top_n)
    }

    /// Apply a classifier result to the tracker
    pub async fn record_classification(
        &self,
        classification: &Classification,
    ) -> Option<MarkOutcome> {
        self.tracker.write().await.record_classification(classification)
    }

    /// Snapshot of the current recognition
    pub async fn current_recognition(&self) -> Recognition {
        self.tracker.read().await.current_recognition().clone()
    }

    /// Landmarks with visited flags, plus the visited count
    pub async fn landmark_statuses(&self) -> (Vec<LandmarkStatus>, usize) {
        let tracker = self.tracker.read().await;
        (tracker.landmark_statuses(), tracker.visited_count())
    }

    /// Extra tracked keys and whether each has been reported
    pub async fn inert_statuses(&self) -> Vec<InertStatus> {
        self.tracker.read().await.inert_statuses()
    }

    /// Text-to-speech backend
    pub fn synthesizer(&self) -> &dyn Synthesizer {
        self.synthesizer.as_ref()
    }

    /// Image classifier backend
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Generated audio clips
    pub fn audio(&self) -> &AudioStore {
        &self.audio
    }

    /// When the server state was created
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
