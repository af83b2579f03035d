use blockfall::core::{Board, PieceGenerator, Session, SessionConfig, SessionSnapshot};
use blockfall::term::{color_rgb, FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let snap = SessionSnapshot::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::default();
    board.set(0, 19, Some(Color::Cyan));
    let session = Session::from_board(
        SessionConfig::default(),
        board,
        PieceGenerator::sequence([PieceKind::O]),
    );
    let snap = session.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Cyan));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_follows_snapshot_dimensions() {
    let session = Session::with_generator(
        SessionConfig {
            width: 6,
            height: 8,
            ..SessionConfig::default()
        },
        PieceGenerator::sequence([PieceKind::I]),
    );
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(14, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
    // I spawns at column 1 of a 6-wide board: columns 1-4 on row 0.
    for x in 3..11 {
        assert_eq!(fb.get(x, 1).unwrap().ch, '█');
    }
}

#[test]
fn term_view_reuses_framebuffer_across_frames() {
    let mut session = Session::with_generator(
        SessionConfig::default(),
        PieceGenerator::sequence([PieceKind::T]),
    );
    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let mut fb = FrameBuffer::new(60, 24);

    view.render_into(&session.snapshot(), vp, &mut fb);
    let first = fb.clone();
    session.tick();
    view.render_into(&session.snapshot(), vp, &mut fb);

    assert_ne!(first, fb);
    assert_eq!((fb.width(), fb.height()), (60, 24));
}
