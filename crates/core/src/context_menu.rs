// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Right-click menus for headers and day cells.
//!
//! ## Invariants
//!
//! - At most one menu is open at a time.
//! - A cell menu captures the cell's category and attachment flag when it
//!   opens; the offered actions are derived from that capture.
//! - "Attach file" requires an absence or leave shift and no attachment yet.
//! - "Download attachment" requires an attachment.

use crate::columns::{ColumnKey, ColumnLayout};
use crate::selection::CellPosition;
use roster_domain::{DateKey, EmployeeId, ShiftCategory, ShiftId};
use serde::{Deserialize, Serialize};

/// The fixed vocabulary of cell observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Observation {
    /// A medical certificate was presented.
    MedicalCertificate,
    /// The employee was in training.
    Training,
    /// The shift was swapped with a colleague.
    ShiftSwap,
    /// Absence with justification.
    JustifiedAbsence,
    /// Absence without justification.
    UnjustifiedAbsence,
    /// Extra hours were worked.
    Overtime,
}

impl Observation {
    /// Every observation in picker order.
    pub const ALL: [Self; 6] = [
        Self::MedicalCertificate,
        Self::Training,
        Self::ShiftSwap,
        Self::JustifiedAbsence,
        Self::UnjustifiedAbsence,
        Self::Overtime,
    ];

    /// The text stored in the schedule's comment map.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MedicalCertificate => "Medical certificate",
            Self::Training => "Training",
            Self::ShiftSwap => "Shift swap",
            Self::JustifiedAbsence => "Justified absence",
            Self::UnjustifiedAbsence => "Unjustified absence",
            Self::Overtime => "Overtime",
        }
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The cell a menu was opened on, with the state captured at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSite {
    /// Grid position of the cell.
    pub position: CellPosition,
    /// The row's employee.
    pub employee: EmployeeId,
    /// The cell's date.
    pub date: DateKey,
    /// Category of the assigned shift, if any.
    pub category: Option<ShiftCategory>,
    /// Whether an attachment is stored on the cell.
    pub has_attachment: bool,
}

impl CellSite {
    /// Returns whether a file may be attached.
    #[must_use]
    pub fn can_attach(&self) -> bool {
        !self.has_attachment
            && self
                .category
                .is_some_and(|category| category.accepts_attachment())
    }

    /// Returns whether an attachment can be downloaded.
    #[must_use]
    pub const fn can_download(&self) -> bool {
        self.has_attachment
    }
}

/// Sub-view of an open cell menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuView {
    /// Shift list and cell actions.
    #[default]
    Default,
    /// The observation vocabulary.
    ObservationPicker,
}

/// An action offered by a cell menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAction {
    /// Assign a catalog shift and close.
    PickShift(ShiftId),
    /// Ask the host for a file to attach.
    AttachFile,
    /// Ask the host to download the stored attachment.
    DownloadAttachment,
    /// Remove assignment, attachment and comment.
    ClearCell,
    /// Switch to the observation picker.
    AddObservation,
    /// Write an observation and close.
    ChooseObservation(Observation),
    /// Return from the observation picker.
    Back,
}

/// An action offered by a header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Freeze or unfreeze the column.
    ToggleFrozen,
    /// Hide the column.
    Hide,
    /// Show every hidden column.
    RestoreHidden,
}

/// The context menu state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContextMenuState {
    /// No menu is shown.
    #[default]
    Closed,
    /// A header menu for one column.
    Header {
        /// The column right-clicked.
        column: ColumnKey,
    },
    /// A cell menu.
    Cell {
        /// The captured cell.
        site: CellSite,
        /// The visible sub-view.
        view: MenuView,
    },
}

impl ContextMenuState {
    /// Returns whether any menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns the captured cell of an open cell menu.
    #[must_use]
    pub const fn cell_site(&self) -> Option<&CellSite> {
        match self {
            Self::Cell { site, .. } => Some(site),
            _ => None,
        }
    }

    /// Lists the actions of an open cell menu in display order.
    ///
    /// `shifts` are the catalog ids in picker order.
    #[must_use]
    pub fn cell_actions<'a, I>(&self, shifts: I) -> Vec<CellAction>
    where
        I: IntoIterator<Item = &'a ShiftId>,
    {
        let Self::Cell { site, view } = self else {
            return Vec::new();
        };
        match view {
            MenuView::ObservationPicker => Observation::ALL
                .iter()
                .copied()
                .map(CellAction::ChooseObservation)
                .chain(std::iter::once(CellAction::Back))
                .collect(),
            MenuView::Default => {
                let mut actions: Vec<CellAction> =
                    shifts.into_iter().cloned().map(CellAction::PickShift).collect();
                if site.can_attach() {
                    actions.push(CellAction::AttachFile);
                }
                if site.can_download() {
                    actions.push(CellAction::DownloadAttachment);
                }
                actions.push(CellAction::ClearCell);
                actions.push(CellAction::AddObservation);
                actions
            }
        }
    }

    /// Returns whether a cell action is currently offered.
    #[must_use]
    pub fn offers_cell_action(&self, action: &CellAction) -> bool {
        let Self::Cell { site, view } = self else {
            return false;
        };
        match (view, action) {
            (
                MenuView::Default,
                CellAction::PickShift(_) | CellAction::ClearCell | CellAction::AddObservation,
            )
            | (
                MenuView::ObservationPicker,
                CellAction::ChooseObservation(_) | CellAction::Back,
            ) => true,
            (MenuView::Default, CellAction::AttachFile) => site.can_attach(),
            (MenuView::Default, CellAction::DownloadAttachment) => site.can_download(),
            _ => false,
        }
    }

    /// Lists the actions of an open header menu.
    #[must_use]
    pub fn header_actions(&self, layout: &ColumnLayout) -> Vec<HeaderAction> {
        if !matches!(self, Self::Header { .. }) {
            return Vec::new();
        }
        let mut actions: Vec<HeaderAction> = vec![HeaderAction::ToggleFrozen, HeaderAction::Hide];
        if layout.has_hidden() {
            actions.push(HeaderAction::RestoreHidden);
        }
        actions
    }
}
