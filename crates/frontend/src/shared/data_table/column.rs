use leptos::prelude::*;
use std::sync::Arc;

/// Renders the content of one cell from the live record of its row
pub type CellRenderer<T> = Arc<dyn Fn(Signal<T>) -> AnyView + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Right,
}

/// One entity column of a [`super::DataTable`].
///
/// The drag handle, selection and actions columns are added by the table
/// itself.
#[derive(Clone)]
pub struct ColumnDef<T: Send + Sync + 'static> {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub hideable: bool,
    pub align: ColumnAlign,
    pub render: CellRenderer<T>,
}

impl<T: Send + Sync + 'static> ColumnDef<T> {
    pub fn new(
        key: &'static str,
        header: &'static str,
        render: impl Fn(Signal<T>) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            header,
            sortable: true,
            hideable: true,
            align: ColumnAlign::Left,
            render: Arc::new(render),
        }
    }

    pub fn align_right(mut self) -> Self {
        self.align = ColumnAlign::Right;
        self
    }

    pub fn not_hideable(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub(crate) fn cell_class(&self) -> &'static str {
        match self.align {
            ColumnAlign::Left => "table__cell",
            ColumnAlign::Right => "table__cell text-right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Part {
        code: String,
    }

    #[test]
    fn test_renderer_receives_a_record_signal() {
        let owner = Owner::new();
        owner.set();
        let column = ColumnDef::new("code", "Code", |item: Signal<Part>| {
            let code = item.with_untracked(|p| p.code.clone());
            assert_eq!(code, "A1");
            ().into_any()
        })
        .align_right();

        let item = RwSignal::new(Part { code: "A1".into() });
        let _ = (column.render)(item.into());
        assert!(column.sortable);
        assert_eq!(column.cell_class(), "table__cell text-right");
    }
}
