use std::sync::{Arc, Mutex};

use lesson_core::fragment::Position;
use services::{DifficultyService, LibraryService, StageService};

/// UI-facing capabilities the composition root provides.
pub trait ViewerApp: Send + Sync {
    fn library(&self) -> Arc<LibraryService>;
    fn stages(&self) -> Arc<StageService>;
    fn difficulty(&self) -> Arc<DifficultyService>;

    /// A deep-link position decoded at launch, if any.
    fn boot_position(&self) -> Option<Position>;
}

#[derive(Clone)]
pub struct AppContext {
    library: Arc<LibraryService>,
    stages: Arc<StageService>,
    difficulty: Arc<DifficultyService>,
    boot_position: Arc<Mutex<Option<Position>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn ViewerApp>) -> Self {
        Self {
            library: app.library(),
            stages: app.stages(),
            difficulty: app.difficulty(),
            boot_position: Arc::new(Mutex::new(app.boot_position())),
        }
    }

    #[must_use]
    pub fn library(&self) -> Arc<LibraryService> {
        Arc::clone(&self.library)
    }

    #[must_use]
    pub fn stages(&self) -> Arc<StageService> {
        Arc::clone(&self.stages)
    }

    #[must_use]
    pub fn difficulty(&self) -> Arc<DifficultyService> {
        Arc::clone(&self.difficulty)
    }

    /// The deep-link position, surrendered once so the picker boots into it
    /// exactly one time and behaves normally afterwards.
    #[must_use]
    pub fn take_boot_position(&self) -> Option<Position> {
        self.boot_position
            .lock()
            .ok()
            .and_then(|mut guard| guard.take())
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn ViewerApp>) -> AppContext {
    AppContext::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use lesson_core::model::LessonId;
    use services::{ContentError, TextSource};
    use storage::repository::InMemoryRepository;

    struct EmptySource;

    #[async_trait]
    impl TextSource for EmptySource {
        async fn fetch_text(&self, _path: &str) -> Result<Option<String>, ContentError> {
            Ok(None)
        }

        fn resource_url(&self, path: &str) -> String {
            path.to_string()
        }
    }

    struct StubApp {
        boot: Option<Position>,
    }

    impl ViewerApp for StubApp {
        fn library(&self) -> Arc<LibraryService> {
            Arc::new(LibraryService::new(Arc::new(EmptySource)))
        }

        fn stages(&self) -> Arc<StageService> {
            Arc::new(StageService::new(Arc::new(EmptySource)))
        }

        fn difficulty(&self) -> Arc<DifficultyService> {
            Arc::new(DifficultyService::new(Arc::new(InMemoryRepository::new())))
        }

        fn boot_position(&self) -> Option<Position> {
            self.boot.clone()
        }
    }

    #[test]
    fn boot_position_is_surrendered_once() {
        let app: Arc<dyn ViewerApp> = Arc::new(StubApp {
            boot: Some(Position {
                lesson: LessonId::new("002"),
                stage: 3,
            }),
        });
        let ctx = build_app_context(&app);

        let first = ctx.take_boot_position().unwrap();
        assert_eq!(first.lesson.as_str(), "002");
        assert_eq!(first.stage, 3);
        assert_eq!(ctx.take_boot_position(), None);
    }

    #[test]
    fn no_boot_position_stays_empty() {
        let app: Arc<dyn ViewerApp> = Arc::new(StubApp { boot: None });
        let ctx = build_app_context(&app);
        assert_eq!(ctx.take_boot_position(), None);
    }
}
