use crate::board::{Board, BoardError, CardBounds, CardEvent, CardId, ColumnId, Point};
use crate::config::Config;
use crate::constants::{STATUS_CARD_CREATED, STATUS_CARD_DELETED, STATUS_CARD_MOVED, STATUS_DRAG_CANCELLED};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::{AddCardInput, CardComponent, ColumnComponent, HelpDialog, LogsDialog, StatusBar};
use crate::ui::core::{actions::Action, event_handler::EventType, Component};
use crate::ui::layout::{BoardLayout, HitTarget, LayoutManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// A left-button press on a card that has not turned into a drag yet
#[derive(Debug, Clone)]
struct PendingPress {
    card: CardId,
    x: u16,
    y: u16,
    bounds: CardBounds,
    width: u16,
}

/// Simple UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub show_help: bool,
    pub show_logs: bool,
    pub status_message: Option<String>,
}

/// Top-level component: owns the board and turns terminal input into the
/// board's card, form and drag operations.
pub struct AppComponent {
    board: Board,
    layout: BoardLayout,
    area: Rect,
    icons: IconService,
    logger: Logger,
    state: UiState,

    // Pointer tracking
    mouse_enabled: bool,
    drag_threshold: u16,
    column_min_width: u16,
    press: Option<PendingPress>,
    pointer: Option<Point>,
    hovered: Option<ColumnId>,
    avatar_width: u16,

    should_quit: bool,
}

/// Center of a terminal cell in board coordinates
fn cell_center(x: u16, y: u16) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

impl AppComponent {
    pub fn new(board: Board, config: &Config, logger: Logger) -> Self {
        Self {
            board,
            layout: BoardLayout::default(),
            area: Rect::default(),
            icons: IconService::new(config.ui.icon_theme),
            logger,
            state: UiState::default(),
            mouse_enabled: config.ui.mouse_enabled,
            drag_threshold: config.ui.drag_threshold,
            column_min_width: config.ui.column_min_width,
            press: None,
            pointer: None,
            hovered: None,
            avatar_width: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Set the screen size and recompute the board layout
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.relayout();
    }

    fn relayout(&mut self) {
        let (board_area, _) = LayoutManager::main_layout(self.area);
        self.layout = BoardLayout::compute(&self.board, board_area, self.column_min_width);
    }

    fn report(&mut self, result: Result<(), BoardError>) {
        if let Err(e) = result {
            log::warn!("Board operation ignored: {}", e);
            self.logger.log(format!("Board: ignored operation: {}", e));
            self.state.status_message = Some(format!("{} {}", self.icons.warning(), e));
        }
    }

    /// Process a terminal event
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_events(mouse),
            EventType::Resize(w, h) => {
                self.resize(Rect::new(0, 0, w, h));
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        if !matches!(action, Action::None | Action::Quit) {
            self.logger.log(format!("Unhandled action: {:?}", action));
        }
    }

    /// Handle global keyboard shortcuts that aren't form-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if self.state.show_help || self.state.show_logs {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') if self.state.show_help => return Action::ShowHelp(false),
                KeyCode::Esc | KeyCode::Char('G') if self.state.show_logs => return Action::ShowLogs(false),
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc if self.board.is_drag_active() => Action::CancelDrag,
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowHelp(!self.state.show_help),
            KeyCode::Char('G') => Action::ShowLogs(!self.state.show_logs),
            KeyCode::Char('t') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn start_drag(&mut self, card: CardId, pointer: Point) {
        let Some(press) = self.press.take().filter(|p| p.card == card) else {
            return;
        };
        // The avatar keeps the offset of the initial press inside the card
        let grab = cell_center(press.x, press.y);
        let Some(event) = self.board.card(card).map(|c| c.on_drag_start(grab, press.bounds)) else {
            return;
        };

        let result = self.board.dispatch(event);
        self.report(result);
        if self.board.is_drag_active() {
            self.avatar_width = press.width;
            self.logger.log(format!("Drag: started card {}", card));
            self.drag_to(pointer);
        }
    }

    /// Track the pointer during a drag: column highlight and placeholder
    fn drag_to(&mut self, pointer: Point) {
        self.pointer = Some(pointer);
        let hit = self.layout.hit_test(pointer.x as u16, pointer.y as u16);
        let entered = hit.column().cloned();

        if entered != self.hovered {
            if let Some(left) = self.hovered.take() {
                let result = self.board.handle_drag_leave(&left, entered.as_ref());
                self.report(result);
            }
            if let Some(column) = &entered {
                let result = self.board.handle_drag_enter(column);
                self.report(result);
            }
            self.hovered = entered.clone();
        }

        if let Some(column) = entered {
            let bounds = self.layout.card_bounds(&column);
            let result = self.board.handle_drag_over(pointer, &column, &bounds).map(|_| ());
            self.report(result);
        }
        self.relayout();
    }

    fn drop_at(&mut self, pointer: Point) {
        let Some(card) = self.board.session().map(|s| s.card) else {
            return;
        };
        self.drag_to(pointer);

        if let Some(column) = self.hovered.clone() {
            match self.board.handle_drop(&column) {
                Ok(Some(outcome)) => {
                    self.logger.log(format!(
                        "Drag: moved card {} from {} to {} at {}",
                        outcome.card, outcome.from, outcome.to, outcome.index
                    ));
                    self.state.status_message = Some(STATUS_CARD_MOVED.to_string());
                }
                Ok(None) => {}
                Err(e) => self.report(Err(e)),
            }
        }

        self.end_drag(card);
    }

    /// Deliver the card's drag-end message; runs after every drag
    fn end_drag(&mut self, card: CardId) {
        let event = self
            .board
            .card(card)
            .map(|c| c.on_drag_end())
            .unwrap_or(CardEvent::DragEnd { card });
        let result = self.board.dispatch(event);
        self.report(result);

        self.pointer = None;
        self.hovered = None;
        self.press = None;
        self.relayout();
    }

    fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::StartDrag { card, pointer } => self.start_drag(card, pointer),
            Action::DragTo(pointer) => self.drag_to(pointer),
            Action::Drop(pointer) => self.drop_at(pointer),
            Action::CancelDrag => {
                if let Some(card) = self.board.session().map(|s| s.card) {
                    self.logger.log(format!("Drag: cancelled card {}", card));
                    self.state.status_message = Some(STATUS_DRAG_CANCELLED.to_string());
                    self.end_drag(card);
                }
            }
            Action::DeleteCard(card) => {
                if let Some(event) = self.board.card(card).map(|c| c.on_delete()) {
                    let result = self.board.dispatch(event);
                    self.report(result);
                    self.logger.log(format!("Card: deleted {}", card));
                    self.state.status_message = Some(STATUS_CARD_DELETED.to_string());
                }
                self.relayout();
            }
            Action::ShowAddCardForm(column) => {
                // One form takes keyboard input at a time
                if let Some(open) = self.board.open_form().cloned() {
                    let result = self.board.hide_add_card_form(&open);
                    self.report(result);
                }
                let result = self.board.show_add_card_form(&column);
                self.report(result);
                self.relayout();
            }
            Action::HideAddCardForm(column) => {
                let result = self.board.hide_add_card_form(&column);
                self.report(result);
                self.relayout();
            }
            Action::SubmitAddCardForm(column) => {
                match self.board.submit_add_card_form(&column) {
                    Ok(Some(card)) => {
                        self.logger.log(format!("Card: created {} in {}", card, column));
                        self.state.status_message = Some(STATUS_CARD_CREATED.to_string());
                    }
                    Ok(None) => {}
                    Err(e) => self.report(Err(e)),
                }
                self.relayout();
            }
            Action::ShowHelp(show) => self.state.show_help = show,
            Action::ShowLogs(show) => self.state.show_logs = show,
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("UI: icon theme {:?}", self.icons.theme()));
            }
            Action::Quit => {
                self.should_quit = true;
                return Action::Quit;
            }
            Action::None => {}
        }
        Action::None
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Esc ends a drag before it reaches an open form
        if key.code == KeyCode::Esc && self.board.is_drag_active() {
            return Action::CancelDrag;
        }
        if let Some(column) = self.board.open_form().cloned() {
            return match self.board.form_mut(&column) {
                Ok(form) => AddCardInput::handle_key(&column, form, key),
                Err(_) => Action::None,
            };
        }
        self.handle_global_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.state.status_message = None;
                match self.layout.hit_test(mouse.column, mouse.row) {
                    HitTarget::DeleteCard { card, .. } => Action::DeleteCard(card),
                    HitTarget::Card { card, column } => {
                        let rect = self.layout.card_rect(card);
                        let bounds = self
                            .layout
                            .card_bounds(&column)
                            .into_iter()
                            .find(|b| b.card == card);
                        if let (Some(rect), Some(bounds)) = (rect, bounds) {
                            self.press = Some(PendingPress {
                                card,
                                x: mouse.column,
                                y: mouse.row,
                                bounds,
                                width: rect.width,
                            });
                        }
                        Action::None
                    }
                    HitTarget::AddCardTrigger(column) => Action::ShowAddCardForm(column),
                    HitTarget::AddCardForm(_) | HitTarget::Column(_) | HitTarget::None => Action::None,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let pointer = cell_center(mouse.column, mouse.row);
                if self.board.is_drag_active() {
                    return Action::DragTo(pointer);
                }
                match &self.press {
                    Some(press)
                        if press.x.abs_diff(mouse.column).max(press.y.abs_diff(mouse.row)) >= self.drag_threshold =>
                    {
                        Action::StartDrag {
                            card: press.card,
                            pointer,
                        }
                    }
                    _ => Action::None,
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.press = None;
                if self.board.is_drag_active() {
                    Action::Drop(cell_center(mouse.column, mouse.row))
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if rect != self.area {
            self.resize(rect);
        } else {
            self.relayout();
        }
        let (_, status_area) = LayoutManager::main_layout(rect);

        for (column, area) in self.board.columns().iter().zip(&self.layout.columns) {
            ColumnComponent::render(f, &self.board, column, area, &self.icons);
        }

        // Drag avatar follows the pointer, offset as grabbed
        if let (Some(session), Some(pointer)) = (self.board.session(), self.pointer) {
            if let Some(card) = self.board.card(session.card) {
                let origin = session.avatar_origin(pointer);
                let image = card.drag_image(self.avatar_width);
                let height = session.placeholder.height.round().max(1.0) as u16;
                CardComponent::render_avatar(
                    f,
                    &image,
                    origin.x.floor() as i32,
                    origin.y.floor() as i32,
                    height,
                    rect,
                    &self.icons,
                );
            }
        }

        StatusBar::render(
            f,
            status_area,
            self.state.status_message.as_deref(),
            self.board.is_drag_active(),
        );

        if self.state.show_logs {
            LogsDialog::render(f, rect, &self.logger.get_logs());
        }
        if self.state.show_help {
            HelpDialog::render(f, rect);
        }
    }
}
