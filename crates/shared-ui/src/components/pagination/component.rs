use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Number of page buttons shown at once.
pub const PAGE_WINDOW: i64 = 5;

/// Sliding window of page numbers to render.
///
/// Shows every page when there are at most `window` of them; otherwise a
/// contiguous run of `window` pages centered on the current page, clamped
/// to `[1, total_pages]`.
pub fn page_window(page: i64, total_pages: i64, window: i64) -> Vec<i64> {
    let total = total_pages.max(1);
    let window = window.max(1);
    if total <= window {
        return (1..=total).collect();
    }
    let page = page.clamp(1, total);
    let start = (page - window / 2).clamp(1, total - window + 1);
    (start..start + window).collect()
}

/// Numbered pagination controls with a sliding window of page buttons and
/// Previous/Next navigation clamped to `[1, total_pages]`.
#[component]
pub fn Pagination(page: Signal<i64>, total_pages: i64) -> Element {
    let current = *page.read();
    let total = total_pages.max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            if current > 1 {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let p = *page.read();
                        page.set((p - 1).max(1));
                    },
                    "Previous"
                }
            }
            for n in page_window(current, total, PAGE_WINDOW) {
                Button {
                    variant: if n == current { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    onclick: move |_| page.set(n),
                    "{n}"
                }
            }
            if current < total {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let p = *page.read();
                        page.set((p + 1).min(total));
                    },
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{page_window, PAGE_WINDOW};
    use pretty_assertions::assert_eq;

    #[test]
    fn shows_all_pages_when_total_fits_window() {
        for total in 1..=PAGE_WINDOW {
            for p in 1..=total {
                assert_eq!(page_window(p, total, PAGE_WINDOW), (1..=total).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn window_is_exactly_five_contiguous_and_contains_current() {
        for total in 6..=40 {
            for p in 1..=total {
                let w = page_window(p, total, PAGE_WINDOW);
                assert_eq!(w.len(), 5, "total={total} p={p}");
                assert!(w.contains(&p), "total={total} p={p} w={w:?}");
                assert!(w[0] >= 1);
                assert!(w[4] <= total);
                for pair in w.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
            }
        }
    }

    #[test]
    fn centers_on_current_page() {
        assert_eq!(page_window(10, 20, 5), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn clamps_at_both_edges() {
        assert_eq!(page_window(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(19, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn out_of_range_page_is_clamped_into_bounds() {
        assert_eq!(page_window(99, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(0, 3, 5), vec![1, 2, 3]);
    }
}
