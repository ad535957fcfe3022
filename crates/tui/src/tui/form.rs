//! Focus bookkeeping for the overlay form. The board owns the values, this
//! only tracks which row and chip the remote is pointing at.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormRow {
    Name,
    Status,
    Category,
    NewCategory,
    Responsible,
    NewResponsible,
    Actions,
}

impl FormRow {
    pub(crate) const ALL: [Self; 7] = [
        FormRow::Name,
        FormRow::Status,
        FormRow::Category,
        FormRow::NewCategory,
        FormRow::Responsible,
        FormRow::NewResponsible,
        FormRow::Actions,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            FormRow::Name => 0,
            FormRow::Status => 1,
            FormRow::Category => 2,
            FormRow::NewCategory => 3,
            FormRow::Responsible => 4,
            FormRow::NewResponsible => 5,
            FormRow::Actions => 6,
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            FormRow::Name => "Name",
            FormRow::Status => "Status",
            FormRow::Category => "Category",
            FormRow::NewCategory => "New category",
            FormRow::Responsible => "Responsible",
            FormRow::NewResponsible => "New responsible",
            FormRow::Actions => "",
        }
    }

    /// Rows that take typed characters.
    pub(crate) fn is_text(self) -> bool {
        matches!(
            self,
            FormRow::Name | FormRow::NewCategory | FormRow::NewResponsible
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    Delete,
    Cancel,
    Save,
}

impl FormAction {
    pub(crate) fn available(editing: bool) -> &'static [FormAction] {
        if editing {
            &[FormAction::Delete, FormAction::Cancel, FormAction::Save]
        } else {
            &[FormAction::Cancel, FormAction::Save]
        }
    }

    pub(crate) fn label(self, editing: bool) -> &'static str {
        match self {
            FormAction::Delete => "Delete",
            FormAction::Cancel => "Cancel",
            FormAction::Save if editing => "Save changes",
            FormAction::Save => "Create task",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FormCursor {
    pub(crate) row: FormRow,
    pub(crate) column: usize,
}

impl Default for FormCursor {
    fn default() -> Self {
        Self {
            row: FormRow::Name,
            column: 0,
        }
    }
}

impl FormCursor {
    /// Move one row down; stops at the last row like a d-pad does.
    pub(crate) fn next_row(&mut self) -> bool {
        let idx = self.row.index();
        match FormRow::ALL.get(idx + 1) {
            Some(row) => {
                self.row = *row;
                self.column = 0;
                true
            }
            None => false,
        }
    }

    pub(crate) fn prev_row(&mut self) -> bool {
        let idx = self.row.index();
        if idx == 0 {
            return false;
        }
        self.row = FormRow::ALL[idx - 1];
        self.column = 0;
        true
    }

    pub(crate) fn next_column(&mut self, len: usize) {
        if self.column + 1 < len {
            self.column += 1;
        }
    }

    pub(crate) fn prev_column(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub(crate) fn clamp(&mut self, len: usize) {
        if self.column >= len {
            self.column = len.saturating_sub(1);
        }
    }
}
