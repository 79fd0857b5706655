use columnist::board::{Board, CardBounds, Column, ColumnId, Point, SeedData};
use columnist::ui::layout::{card_height, BoardLayout, HitTarget, LayoutManager};
use ratatui::layout::Rect;

fn board() -> Board {
    let mut board = Board::new(vec![
        Column::new(ColumnId::new("todo"), "To Do"),
        Column::new(ColumnId::new("done"), "Done"),
    ])
    .unwrap();
    board.seed(&SeedData::new().with_column("todo", ["A", "B", "C"]).with_column("done", ["D"]));
    board
}

fn area() -> Rect {
    Rect::new(0, 0, 60, 20)
}

#[test]
fn test_main_layout_reserves_status_line() {
    let (board_area, status) = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(board_area, Rect::new(0, 0, 80, 23));
    assert_eq!(status, Rect::new(0, 23, 80, 1));
}

#[test]
fn test_cards_stack_inside_column_borders() {
    let board = board();
    let layout = BoardLayout::compute(&board, area(), 20);
    let todo = layout.column_area(&ColumnId::new("todo")).unwrap();

    assert_eq!(todo.area, Rect::new(0, 0, 30, 20));
    let tops: Vec<u16> = todo.cards.iter().map(|c| c.rect.y).collect();
    assert_eq!(tops, vec![1, 4, 7]);
    assert!(todo.cards.iter().all(|c| c.rect.x == 1 && c.rect.width == 28));
    assert_eq!(todo.footer, Rect::new(1, 18, 28, 1));
    assert!(todo.placeholder.is_none());
}

#[test]
fn test_card_bounds_match_card_rects() {
    let board = board();
    let layout = BoardLayout::compute(&board, area(), 20);
    let todo = ColumnId::new("todo");
    let bounds = layout.card_bounds(&todo);

    assert_eq!(bounds.len(), 3);
    assert_eq!(bounds[0].card, board.column(&todo).unwrap().cards()[0]);
    assert_eq!((bounds[1].left, bounds[1].top, bounds[1].height), (1.0, 4.0, 3.0));
    assert!(layout.card_bounds(&ColumnId::new("archive")).is_empty());
}

#[test]
fn test_hit_test_targets() {
    let board = board();
    let layout = BoardLayout::compute(&board, area(), 20);
    let todo = ColumnId::new("todo");
    let a = board.column(&todo).unwrap().cards()[0];

    assert_eq!(layout.hit_test(5, 2), HitTarget::Card { card: a, column: todo.clone() });
    assert_eq!(layout.hit_test(27, 1), HitTarget::DeleteCard { card: a, column: todo.clone() });
    assert_eq!(layout.hit_test(5, 18), HitTarget::AddCardTrigger(todo.clone()));
    assert_eq!(layout.hit_test(5, 14), HitTarget::Column(todo.clone()));
    assert_eq!(layout.hit_test(45, 14).column(), Some(&ColumnId::new("done")));
    assert_eq!(layout.hit_test(70, 5), HitTarget::None);
}

#[test]
fn test_open_form_takes_footer_space() {
    let mut board = board();
    let todo = ColumnId::new("todo");
    board.show_add_card_form(&todo).unwrap();
    let layout = BoardLayout::compute(&board, area(), 20);
    let column = layout.column_area(&todo).unwrap();

    assert!(column.form_open);
    assert_eq!(column.footer, Rect::new(1, 14, 28, 5));
    assert_eq!(layout.hit_test(5, 15), HitTarget::AddCardForm(todo));
}

#[test]
fn test_dragged_card_is_hidden_and_placeholder_shown() {
    let mut board = board();
    let todo = ColumnId::new("todo");
    let ids = board.column(&todo).unwrap().cards().to_vec();

    board
        .handle_drag_start(ids[0], Point::new(2.0, 2.0), CardBounds::new(ids[0], 1.0, 3.0))
        .unwrap();
    let layout = BoardLayout::compute(&board, area(), 20);
    let bounds = layout.card_bounds(&todo);
    // Below the midpoint of C
    board.handle_drag_over(Point::new(2.0, 7.0), &todo, &bounds).unwrap();

    let layout = BoardLayout::compute(&board, area(), 20);
    let column = layout.column_area(&todo).unwrap();
    let visible: Vec<_> = column.cards.iter().map(|c| c.card).collect();
    assert_eq!(visible, vec![ids[1], ids[2]]);
    assert_eq!(column.placeholder, Some(Rect::new(1, 7, 28, 3)));
}

#[test]
fn test_card_height_grows_with_text() {
    assert_eq!(card_height("one two three four", 10), 5);
}

#[test]
fn test_card_bounds_include_cards_below_visible_area() {
    let mut board = Board::new(vec![Column::new(ColumnId::new("todo"), "To Do")]).unwrap();
    board.seed(&SeedData::new().with_column("todo", ["A", "B", "C", "D", "E"]));
    let todo = ColumnId::new("todo");
    let layout = BoardLayout::compute(&board, Rect::new(0, 0, 30, 12), 20);

    // Rows 1..10 hold cards; the footer sits on row 10
    assert_eq!(layout.column_area(&todo).unwrap().cards.len(), 3);
    let tops: Vec<f64> = layout.card_bounds(&todo).iter().map(|b| b.top).collect();
    assert_eq!(tops, vec![1.0, 4.0, 7.0, 10.0, 13.0]);
}
