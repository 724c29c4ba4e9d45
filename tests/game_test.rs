//! Tests for the game context: rebuilds, reveals, and view updates.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use trivia_board::{
    Board, BoardBuilder, BoardShape, BoardView, BuildError, CategoryData, CategoryId,
    CategorySummary, CellRef, ClueData, Game, InMemorySource, QuestionSource, RevealError,
    RevealState, SourceError, TextView,
};

/// View that records every call the game makes.
#[derive(Debug, Default)]
struct RecordingView {
    renders: usize,
    updates: Vec<(CellRef, String)>,
}

impl BoardView for RecordingView {
    fn render(&mut self, _board: &Board) {
        self.renders += 1;
    }

    fn update_cell(&mut self, cell: CellRef, text: &str) {
        self.updates.push((cell, text.to_string()));
    }
}

/// Healthy source that can be switched off mid-game.
struct SwitchableSource {
    inner: InMemorySource,
    online: AtomicBool,
}

#[async_trait::async_trait]
impl QuestionSource for SwitchableSource {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, SourceError> {
        if self.online.load(Ordering::SeqCst) {
            self.inner.list_categories(count).await
        } else {
            Err(SourceError::new("offline"))
        }
    }

    async fn get_category(&self, id: CategoryId) -> Result<CategoryData, SourceError> {
        self.inner.get_category(id).await
    }
}

fn hundred_categories() -> InMemorySource {
    (1..=100).fold(InMemorySource::new(), |src, id| {
        let clues = (0..7)
            .map(|n| {
                ClueData::new(
                    format!("Question {}/{}", id, n),
                    format!("Answer {}/{}", id, n),
                )
            })
            .collect();
        src.with_category(CategoryId::new(id), format!("Topic {}", id), clues)
    })
}

fn classic_game(seed: u64) -> Game<InMemorySource> {
    Game::new(
        BoardBuilder::new(hundred_categories(), BoardShape::CLASSIC),
        Some(seed),
    )
}

#[tokio::test]
async fn test_reveal_question_then_answer_then_nothing() {
    let mut game = classic_game(2024);
    let mut view = RecordingView::default();

    let board = game.new_game(&mut view).await.expect("Build should succeed");
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 5);
    let clue = board.clue(CellRef::new(0, 0)).unwrap().clone();
    assert_eq!(view.renders, 1);

    let cell = CellRef::new(0, 0);

    let text = game.reveal(cell, &mut view).unwrap();
    assert_eq!(text, Some(clue.question()));
    assert_eq!(
        game.board().unwrap().clue(cell).unwrap().state(),
        RevealState::Question
    );

    let text = game.reveal(cell, &mut view).unwrap();
    assert_eq!(text, Some(clue.answer()));
    assert_eq!(
        game.board().unwrap().clue(cell).unwrap().state(),
        RevealState::Answer
    );

    let text = game.reveal(cell, &mut view).unwrap();
    assert_eq!(text, None);
    assert_eq!(
        game.board().unwrap().clue(cell).unwrap().state(),
        RevealState::Answer
    );

    // Exactly one view update per transition, none for the terminal no-op
    assert_eq!(
        view.updates,
        vec![
            (cell, clue.question().to_string()),
            (cell, clue.answer().to_string()),
        ]
    );
}

#[tokio::test]
async fn test_reveal_is_per_clue() {
    let mut game = classic_game(7);
    let mut view = RecordingView::default();
    game.new_game(&mut view).await.unwrap();

    game.reveal(CellRef::new(2, 3), &mut view).unwrap();
    game.reveal(CellRef::new(5, 4), &mut view).unwrap();
    game.reveal(CellRef::new(5, 4), &mut view).unwrap();

    let board = game.board().unwrap();
    assert_eq!(board.count_in_state(RevealState::Hidden), 28);
    assert_eq!(board.count_in_state(RevealState::Question), 1);
    assert_eq!(board.count_in_state(RevealState::Answer), 1);
}

#[tokio::test]
async fn test_unknown_cell_is_reported_and_harmless() {
    let mut game = classic_game(1);
    let mut view = RecordingView::default();
    game.new_game(&mut view).await.unwrap();

    for cell in [CellRef::new(6, 0), CellRef::new(0, 5), CellRef::new(100, 100)] {
        let err = game.reveal(cell, &mut view).unwrap_err();
        assert_eq!(err, RevealError::UnknownClue(cell));
    }
    assert!(view.updates.is_empty());
    assert_eq!(game.board().unwrap().count_in_state(RevealState::Hidden), 30);
}

#[test]
fn test_reveal_before_first_board() {
    let mut game = classic_game(1);
    let mut view = RecordingView::default();

    let cell = CellRef::new(0, 0);
    assert_eq!(
        game.reveal(cell, &mut view),
        Err(RevealError::UnknownClue(cell))
    );
    assert!(game.board().is_none());
    assert_eq!(game.generation(), 0);
}

#[tokio::test]
async fn test_rebuild_replaces_board_and_resets_state() {
    let mut game = classic_game(3);
    let mut view = RecordingView::default();

    game.new_game(&mut view).await.unwrap();
    game.reveal(CellRef::new(0, 0), &mut view).unwrap();
    let first = game.board().unwrap().clone();

    game.new_game(&mut view).await.unwrap();
    let second = game.board().unwrap();

    assert_eq!(game.generation(), 2);
    assert_eq!(view.renders, 2);
    assert_eq!(second.count_in_state(RevealState::Hidden), 30);
    assert_ne!(&first, second);
}

#[tokio::test]
async fn test_failed_rebuild_keeps_previous_board() {
    let source = Arc::new(SwitchableSource {
        inner: hundred_categories(),
        online: AtomicBool::new(true),
    });
    let mut game = Game::new(
        BoardBuilder::new(Arc::clone(&source), BoardShape::CLASSIC),
        Some(5),
    );
    let mut view = RecordingView::default();

    game.new_game(&mut view).await.unwrap();
    game.reveal(CellRef::new(1, 1), &mut view).unwrap();
    let before = game.board().unwrap().clone();

    source.online.store(false, Ordering::SeqCst);
    let err = game.new_game(&mut view).await.unwrap_err();
    assert!(matches!(err, BuildError::Source(_)));

    assert_eq!(game.board(), Some(&before));
    assert_eq!(game.generation(), 1);
    assert_eq!(view.renders, 1);

    // The kept board is still playable
    let text = game.reveal(CellRef::new(1, 1), &mut view).unwrap();
    assert_eq!(text, Some(before.clue(CellRef::new(1, 1)).unwrap().answer()));
}

#[tokio::test]
async fn test_text_view_shows_revealed_cells() {
    let source = InMemorySource::new()
        .with_category(
            CategoryId::new(1),
            "Space",
            vec![ClueData::new("Red planet", "Mars")],
        )
        .with_category(
            CategoryId::new(2),
            "Rivers",
            vec![ClueData::new("Flows through Cairo", "The Nile")],
        );
    let mut game = Game::new(
        BoardBuilder::new(source, BoardShape::new(2, 1).unwrap()),
        Some(0),
    );
    let mut view = TextView::with_column_width(Vec::new(), 20);

    game.new_game(&mut view).await.unwrap();
    let board = game.board().unwrap();
    let space = board
        .categories()
        .iter()
        .position(|c| c.title() == "Space")
        .unwrap();

    let grid = view.format_board(board);
    assert!(grid.contains("Space"));
    assert!(grid.contains("Rivers"));
    assert!(!grid.contains("Red planet"));

    game.reveal(CellRef::new(space, 0), &mut view).unwrap();
    let grid = view.format_board(game.board().unwrap());
    assert!(grid.contains("Red planet"));
    assert!(!grid.contains("Mars"));

    let out = String::from_utf8(view.into_inner()).unwrap();
    assert!(out.ends_with(&format!("[{}-0] Red planet\n", space)));
}
