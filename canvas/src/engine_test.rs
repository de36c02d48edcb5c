use super::*;
use crate::clock::ManualClock;

// =============================================================
// Helpers
// =============================================================

fn small_config() -> BoardConfig {
    BoardConfig {
        colors: vec![Color::from("A"), Color::from("B"), Color::from("C")],
        width: 3,
        height: 2,
        cooldown_ms: 3000,
        tick_ms: 990,
        notice_ms: 3000,
        ..BoardConfig::default()
    }
}

fn make_board() -> (BoardCore<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let board = BoardCore::new(small_config(), clock.clone()).unwrap();
    (board, clock)
}

fn pos(row: usize, col: usize) -> CellPos {
    CellPos::new(row, col)
}

fn has_action<F>(actions: &[Action], pred: F) -> bool
where
    F: Fn(&Action) -> bool,
{
    actions.iter().any(pred)
}

fn is_placed(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::Placed { .. }))
}

fn is_rejected(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::Rejected { .. }))
}

fn schedules(actions: &[Action], kind: TimerKind) -> Option<TimerToken> {
    actions.iter().find_map(|a| match a {
        Action::ScheduleTimeout { token, .. } | Action::ScheduleInterval { token, .. } if token.kind == kind => {
            Some(*token)
        }
        _ => None,
    })
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_lays_out_row_major_grid() {
    let (board, _) = make_board();
    assert_eq!(board.cells().len(), 6);
    assert_eq!(board.width(), 3);
    assert_eq!(board.height(), 2);
    assert_eq!(board.cells()[4].pos(), pos(1, 1));
}

#[test]
fn new_cells_use_last_palette_color() {
    let (board, _) = make_board();
    assert!(board.cells().iter().all(|c| c.color() == &Color::from("C")));
}

#[test]
fn new_honors_explicit_cell_color() {
    let config = BoardConfig { cell_color: Some(Color::from("B")), ..small_config() };
    let board = BoardCore::new(config, ManualClock::new(0)).unwrap();
    assert_eq!(board.cell(pos(0, 0)).unwrap().color(), &Color::from("B"));
}

#[test]
fn new_rejects_invalid_initial_selection() {
    let config = BoardConfig { initial_color: Some(Color::from("Z")), ..small_config() };
    let result = BoardCore::new(config, ManualClock::new(0));
    assert!(matches!(
        result,
        Err(BoardError::Config(ConfigError::Palette(PaletteError::InvalidSelection(_))))
    ));
}

#[test]
fn new_rejects_oversized_grid() {
    let config = BoardConfig { width: usize::MAX, height: 2, ..small_config() };
    assert!(matches!(
        BoardCore::new(config, ManualClock::new(0)),
        Err(BoardError::Config(ConfigError::GridTooLarge { .. }))
    ));
}

#[test]
fn new_starts_ready_and_quiet() {
    let (board, _) = make_board();
    assert!(!board.is_cooling());
    assert!(!board.notice_visible());
    assert!(board.countdown_text().is_none());
    assert_eq!(board.palette().selected_color(), &Color::from("A"));
}

// =============================================================
// Placement gate
// =============================================================

#[test]
fn first_placement_is_accepted() {
    let (mut board, _) = make_board();
    let actions = board.activate_cell(pos(0, 0)).unwrap();
    assert!(is_placed(&actions));
    assert_eq!(board.cell(pos(0, 0)).unwrap().color(), &Color::from("A"));
}

#[test]
fn accepted_placement_uses_selected_color() {
    let (mut board, _) = make_board();
    board.select_color(&Color::from("B")).unwrap();
    let actions = board.activate_cell(pos(1, 2)).unwrap();
    assert!(actions.contains(&Action::Placed { pos: pos(1, 2), color: Color::from("B") }));
    assert_eq!(board.cell(pos(1, 2)).unwrap().color(), &Color::from("B"));
}

#[test]
fn gate_follows_cooldown_window() {
    let (mut board, clock) = make_board();
    assert!(is_placed(&board.activate_cell(pos(0, 0)).unwrap()));

    clock.set(1500);
    assert!(is_rejected(&board.activate_cell(pos(0, 1)).unwrap()));

    clock.set(3000);
    assert!(is_placed(&board.activate_cell(pos(0, 1)).unwrap()));
}

#[test]
fn rejection_reports_remaining_time() {
    let (mut board, clock) = make_board();
    board.activate_cell(pos(0, 0)).unwrap();
    clock.set(1200);
    let actions = board.activate_cell(pos(0, 1)).unwrap();
    assert!(actions.contains(&Action::Rejected { pos: pos(0, 1), remaining_ms: 1800 }));
}

#[test]
fn rejection_does_not_touch_cell() {
    let (mut board, clock) = make_board();
    board.activate_cell(pos(0, 0)).unwrap();
    board.select_color(&Color::from("B")).unwrap();
    clock.set(10);

    board.activate_cell(pos(0, 0)).unwrap();
    board.activate_cell(pos(0, 1)).unwrap();

    assert_eq!(board.cell(pos(0, 0)).unwrap().color(), &Color::from("A"));
    assert_eq!(board.cell(pos(0, 1)).unwrap().color(), &Color::from("C"));
}

#[test]
fn rejection_does_not_extend_cooldown() {
    let (mut board, clock) = make_board();
    board.activate_cell(pos(0, 0)).unwrap();
    clock.set(2999);
    board.activate_cell(pos(0, 1)).unwrap();
    clock.set(3000);
    assert!(is_placed(&board.activate_cell(pos(0, 1)).unwrap()));
}

#[test]
fn rejection_shows_notice_and_schedules_hide() {
    let (mut board, clock) = make_board();
    board.activate_cell(pos(0, 0)).unwrap();
    clock.set(100);
    let actions = board.activate_cell(pos(0, 1)).unwrap();
    assert!(actions.contains(&Action::NoticeShown));
    assert!(board.notice_visible());
    assert!(has_action(&actions, |a| matches!(
        a,
        Action::ScheduleTimeout { token, delay_ms: 3000 } if token.kind == TimerKind::NoticeHide
    )));
}

#[test]
fn second_rejection_cancels_pending_hide_first() {
    let (mut board, clock) = make_board();
    board.activate_cell(pos(0, 0)).unwrap();
    clock.set(100);
    board.activate_cell(pos(0, 1)).unwrap();
    clock.set(200);
    let actions = board.activate_cell(pos(0, 1)).unwrap();
    let cancel = actions.iter().position(|a| a == &Action::CancelTimer(TimerKind::NoticeHide));
    let schedule = actions.iter().position(|a| matches!(a, Action::ScheduleTimeout { .. }));
    assert!(cancel.unwrap() < schedule.unwrap());
}

#[test]
fn activate_out_of_bounds_is_an_error() {
    let (mut board, _) = make_board();
    assert!(matches!(board.activate_cell(pos(2, 0)), Err(BoardError::OutOfBounds(_))));
    assert!(matches!(board.activate_cell(pos(0, 3)), Err(BoardError::OutOfBounds(_))));
    assert!(!board.is_cooling());
}

// =============================================================
// Countdown
// =============================================================

#[test]
fn accepted_placement_starts_countdown() {
    let (mut board, _) = make_board();
    let actions = board.activate_cell(pos(0, 0)).unwrap();
    assert!(actions.contains(&Action::CountdownText(Some("3s".into()))));
    assert!(has_action(&actions, |a| matches!(
        a,
        Action::ScheduleInterval { every_ms: 990, .. }
    )));
    assert_eq!(board.countdown_text(), Some("3s"));
}

#[test]
fn ticks_count_down_and_clear() {
    let (mut board, clock) = make_board();
    let token = schedules(&board.activate_cell(pos(0, 0)).unwrap(), TimerKind::CountdownTick).unwrap();

    clock.set(990);
    assert_eq!(board.on_timer(token), vec![Action::CountdownText(Some("2s".into()))]);
    clock.set(1980);
    assert_eq!(board.on_timer(token), vec![Action::CountdownText(Some("1s".into()))]);
    clock.set(2970);
    assert_eq!(
        board.on_timer(token),
        vec![
            Action::CountdownText(Some("0s".into())),
            Action::CountdownText(None),
            Action::CancelTimer(TimerKind::CountdownTick),
        ]
    );
    assert!(board.countdown_text().is_none());
}

#[test]
fn new_placement_restarts_countdown_and_stales_old_tick() {
    let (mut board, clock) = make_board();
    let old = schedules(&board.activate_cell(pos(0, 0)).unwrap(), TimerKind::CountdownTick).unwrap();
    clock.set(3000);
    let actions = board.activate_cell(pos(0, 1)).unwrap();
    let new = schedules(&actions, TimerKind::CountdownTick).unwrap();

    assert!(actions.contains(&Action::CancelTimer(TimerKind::CountdownTick)));
    assert_ne!(old, new);

    clock.set(3990);
    assert!(board.on_timer(old).is_empty());
    assert_eq!(board.on_timer(new), vec![Action::CountdownText(Some("2s".into()))]);
}

// =============================================================
// Notice
// =============================================================

#[test]
fn notice_timer_hides_notice() {
    let (mut board, clock) = make_board();
    board.activate_cell(pos(0, 0)).unwrap();
    clock.set(100);
    let token = schedules(&board.activate_cell(pos(0, 1)).unwrap(), TimerKind::NoticeHide).unwrap();
    clock.set(3100);
    assert_eq!(board.on_timer(token), vec![Action::NoticeHidden]);
    assert!(!board.notice_visible());
}

#[test]
fn hide_notice_cancels_pending_hide() {
    let (mut board, clock) = make_board();
    board.activate_cell(pos(0, 0)).unwrap();
    clock.set(100);
    let token = schedules(&board.activate_cell(pos(0, 1)).unwrap(), TimerKind::NoticeHide).unwrap();

    let actions = board.hide_notice();
    assert!(actions.contains(&Action::CancelTimer(TimerKind::NoticeHide)));
    assert!(actions.contains(&Action::NoticeHidden));
    assert!(board.on_timer(token).is_empty());
}

#[test]
fn hide_notice_when_hidden_is_quiet() {
    let (mut board, _) = make_board();
    assert!(board.hide_notice().is_empty());
}

// =============================================================
// Palette
// =============================================================

#[test]
fn select_color_reports_change() {
    let (mut board, _) = make_board();
    let actions = board.select_color(&Color::from("C")).unwrap();
    assert_eq!(actions, vec![Action::SelectionChanged(Color::from("C"))]);
    assert_eq!(board.palette().selected_color(), &Color::from("C"));
}

#[test]
fn select_unknown_color_is_rejected() {
    let (mut board, _) = make_board();
    assert!(matches!(
        board.select_color(&Color::from("Q")),
        Err(BoardError::Palette(PaletteError::InvalidSelection(_)))
    ));
    assert_eq!(board.palette().selected_color(), &Color::from("A"));
}

#[test]
fn selection_does_not_affect_cooldown() {
    let (mut board, clock) = make_board();
    board.activate_cell(pos(0, 0)).unwrap();
    clock.set(500);
    board.select_color(&Color::from("B")).unwrap();
    assert!(board.is_cooling());
    assert_eq!(board.remaining_ms(), 2500);
}
