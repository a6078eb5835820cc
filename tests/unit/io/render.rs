//! Tests for text rendering layout

#[cfg(test)]
mod tests {
    use gridshape::io::render::{render, render_to_string, render_with};
    use gridshape::{Grid, Result};
    use std::fmt::{self, Write};

    // Tests the exact header and row layout
    // Verified by iterating columns as lines
    #[test]
    fn test_render_layout() -> Result<()> {
        let mut grid = Grid::<i32>::new(3, 2)?;
        grid.set(0, 0, 1)?.set(1, 1, 5)?;

        assert_eq!(
            render_to_string(&grid),
            "  _______\n0| 1 0 0 \n1| 0 5 0 \n"
        );
        Ok(())
    }

    // Tests the widest cell sets the column width for every cell
    #[test]
    fn test_render_pads_to_widest_cell() -> Result<()> {
        let mut grid = Grid::<i32>::new(2, 1)?;
        grid.set(1, 0, -12)?;

        assert_eq!(render_to_string(&grid), "  _________\n0| 0   -12 \n");
        Ok(())
    }

    // Tests row labels are right-aligned to the widest label
    #[test]
    fn test_render_label_width() -> Result<()> {
        let grid = Grid::<u8>::new(1, 11)?;
        let text = render_to_string(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines.first().copied(), Some("   ___"));
        assert_eq!(lines.get(1).copied(), Some(" 0| 0 "));
        assert_eq!(lines.get(11).copied(), Some("10| 0 "));
        Ok(())
    }

    // Tests the formatter receives grid coordinates
    #[test]
    fn test_render_with_formatter() -> Result<()> {
        let grid = Grid::<bool>::new(2, 2)?;
        let text = render_with(&grid, |_, x, y| {
            let mark = if x == y { "#" } else { "." };
            mark.to_string()
        });

        assert_eq!(text, "  _____\n0| # . \n1| . # \n");
        Ok(())
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    // Tests sink errors propagate out of render
    #[test]
    fn test_render_propagates_sink_errors() -> Result<()> {
        let grid = Grid::<u8>::new(1, 1)?;
        assert!(render(&grid, &mut FailingSink, |v, _, _| v.to_string()).is_err());

        let mut sink = String::from("> ");
        assert!(render(&grid, &mut sink, |v, _, _| v.to_string()).is_ok());
        assert!(sink.starts_with(">   ___"));
        Ok(())
    }
}
