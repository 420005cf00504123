//! Keyboard and mouse input handling and the interactive loop.
//!
//! This module maps terminal events to tree actions and runs the
//! full-screen browser until the user quits.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{Line, Span};
use crate::ui::theme;

use super::render::RenderStyle;
use super::tree::{CatalogTree, TreeAction};

/// Lines drawn above the rows (title + blank line)
const HEADER_LINES: u16 = 2;
/// Lines drawn below the rows (rule, status, blank, two help lines)
const FOOTER_LINES: u16 = 5;

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(TreeAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Home | KeyCode::Char('g') => Some(TreeAction::First),
        KeyCode::End | KeyCode::Char('G') => Some(TreeAction::Last),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TreeAction::Activate),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('p') => Some(TreeAction::ShowProducts),
        KeyCode::Char('c') => Some(TreeAction::ShowCategories),
        KeyCode::Tab => Some(TreeAction::ToggleView),
        KeyCode::Char('m') => Some(TreeAction::LoadMore),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Scroll state for the row list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
}

impl Viewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll so `cursor` is inside a window of `height` rows and return
    /// the visible row range.
    pub fn scroll_to(&mut self, cursor: usize, total: usize, height: usize) -> Range<usize> {
        let height = height.max(1);
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + height {
            self.offset = cursor + 1 - height;
        }
        // Don't leave blank space at the bottom after rows disappear.
        self.offset = self.offset.min(total.saturating_sub(height));
        self.offset..total.min(self.offset + height)
    }

    /// Map a screen row to a tree row index.
    pub fn row_at(&self, screen_row: u16, height: usize) -> Option<usize> {
        let row = screen_row.checked_sub(HEADER_LINES)? as usize;
        (row < height).then_some(self.offset + row)
    }
}

/// Number of tree rows that fit on a screen of `screen_height` lines
pub fn rows_height(screen_height: u16) -> usize {
    screen_height.saturating_sub(HEADER_LINES + FOOTER_LINES).max(1) as usize
}

/// Apply a mouse event. Only left clicks do anything.
pub fn handle_mouse(
    tree: &mut CatalogTree<'_>,
    viewport: &Viewport,
    event: MouseEvent,
    height: usize,
    style: RenderStyle,
) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = viewport.row_at(event.row, height) {
                tree.click(index, event.column as usize, style);
            }
        }
        MouseEventKind::ScrollUp => {
            tree.handle_action(TreeAction::Up);
        }
        MouseEventKind::ScrollDown => {
            tree.handle_action(TreeAction::Down);
        }
        _ => {}
    }
}

/// Restores the terminal when dropped, on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        use crossterm::{cursor, event::EnableMouseCapture, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::{cursor, event::DisableMouseCapture, execute, terminal};

        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn draw(
    out: &mut impl Write,
    tree: &CatalogTree<'_>,
    viewport: &mut Viewport,
    title: &str,
    style: RenderStyle,
    (width, height): (u16, u16),
) -> io::Result<()> {
    use crossterm::{cursor, queue, terminal};

    let width = width as usize;
    let rows_height = rows_height(height);

    queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    let mut header = Line::new();
    header.push(Span::info(format!("{} ", Icon::Catalog.render(style.unicode))));
    header.push(Span::plain(title).bold());
    write!(out, "{}\r\n\r\n", header.render_clipped(width, style.color))?;

    let rendered = tree.render_rows(style);
    let visible = viewport.scroll_to(tree.cursor_position(), rendered.len(), rows_height);
    for row in &rendered[visible.clone()] {
        write!(out, "{}\r\n", row.line.render_clipped(width, style.color))?;
    }
    for _ in visible.len()..rows_height {
        write!(out, "\r\n")?;
    }

    write!(out, "{}\r\n", theme::rule(width, style.unicode))?;
    write!(out, "{}\r\n\r\n", tree.render_status_bar(style))?;
    for line in tree.render_help_bar(style).lines() {
        let mut help = Line::new();
        help.push(Span::dim(line));
        write!(out, "{}\r\n", help.render_clipped(width, style.color))?;
    }

    out.flush()
}

/// Run the catalog tree interactively until the user quits.
pub fn run_interactive(tree: &mut CatalogTree<'_>, title: &str, style: RenderStyle) -> io::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};
    use crossterm::terminal;

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    let mut viewport = Viewport::default();
    let mut size = terminal::size()?;

    draw(&mut stdout, tree, &mut viewport, title, style, size)?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key) {
                    log::trace!("key {:?} -> {:?}", key.code, action);
                    if tree.handle_action(action) {
                        break;
                    }
                }
            }
            Event::Mouse(mouse) => {
                handle_mouse(tree, &viewport, mouse, rows_height(size.1), style);
            }
            Event::Resize(w, h) => {
                size = (w, h);
            }
            _ => continue,
        }
        draw(&mut stdout, tree, &mut viewport, title, style, size)?;
    }

    Ok(())
}
