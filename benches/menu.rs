//! Layout benchmarks for the menu bar.
use criterion::{Criterion, criterion_group, criterion_main};

use trace_ui::core::text::Monospace;
use trace_ui::core::{Context, Input, Limits, Ops, Point, Size};
use trace_ui::core::{Cursor, mouse};
use trace_ui::{Menu, MenuGroup, MenuItem, Theme, Window};

criterion_main!(benches);
criterion_group!(benches, layout_closed, layout_open);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Message {
    Item(usize, usize),
}

fn menu() -> Menu<Message> {
    (0..8)
        .map(|group| {
            (0..24).fold(MenuGroup::new(format!("Group {group}")), |menu, item| {
                let menu = menu.item(
                    MenuItem::new(format!("Item {item}"), Message::Item(group, item))
                        .shortcut(format!("Ctrl+{item}")),
                );

                if item % 6 == 5 { menu.divider() } else { menu }
            })
        })
        .collect()
}

fn frame(menu: &mut Menu<Message>, window: &Window<'_>, input: &mut Input) -> usize {
    let mut ops = Ops::new();

    {
        let mut ctx = Context::new(
            &mut ops,
            Limits::new(Size::ZERO, Size::new(1920.0, 1080.0)),
            Some(&mut *input),
        );
        let _ = menu.layout(window, &mut ctx);
    }

    input.next_frame();
    ops.len()
}

fn layout_closed(c: &mut Criterion) {
    let theme = Theme::light();
    let shaper = Monospace::default();
    let window = Window::new(&theme, &shaper);
    let mut input = Input::new(Cursor::Unavailable);
    let mut menu = menu();

    let _ = c.bench_function("menu: layout closed", |b| {
        b.iter(|| frame(&mut menu, &window, &mut input));
    });
}

fn layout_open(c: &mut Criterion) {
    let theme = Theme::light();
    let shaper = Monospace::default();
    let window = Window::new(&theme, &shaper);
    let mut input = Input::new(Cursor::Available(Point::new(5.0, 5.0)));
    let mut menu = menu();

    let _ = frame(&mut menu, &window, &mut input);
    input.handle(&mouse::Event::ButtonPressed(mouse::Button::Left).into());
    input.handle(&mouse::Event::ButtonReleased(mouse::Button::Left).into());
    let _ = frame(&mut menu, &window, &mut input);
    let _ = frame(&mut menu, &window, &mut input);

    assert!(menu.is_open(), "the first group should be open");

    let _ = c.bench_function("menu: layout open", |b| {
        b.iter(|| frame(&mut menu, &window, &mut input));
    });
}
