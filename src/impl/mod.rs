// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod chart_config_datasource;
        pub(crate) mod postings_csv_datasource;
        pub(crate) mod prices_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod accounting_amount_model;
        pub(crate) mod chart_config_model;
        pub(crate) mod currency_code_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod ordered_entries_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod chart_config_repository_impl;
        pub(crate) mod in_memory_ledger;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod aggregation;
        pub(crate) mod chart_payload;
        pub(crate) mod ledger;
        pub(crate) mod month;
        pub(crate) mod options;
        pub(crate) mod resolved_series;
        pub(crate) mod series_spec;
    }
    pub(crate) mod logic {
        pub(crate) mod filter_expression;
        pub(crate) mod month_enumerator;
        pub(crate) mod series_resolver;
    }
    pub(crate) mod repositories {
        pub(crate) mod chart_config_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod monthly_pnl_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod table_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::aggregation::*;
        pub use crate::domain::entities::chart_payload::*;
        pub use crate::domain::entities::ledger::*;
        pub use crate::domain::entities::month::*;
        pub use crate::domain::entities::options::*;
        pub use crate::domain::entities::resolved_series::*;
        pub use crate::domain::entities::series_spec::*;
    }

    pub mod ledger {
        pub use crate::data::repositories::in_memory_ledger::InMemoryLedger;
    }

    pub mod months {
        pub use crate::domain::logic::month_enumerator::enumerate_months;
    }

    pub mod printers {
        pub use crate::presentation::table_printer::PnlTablePrinter;
    }

    pub mod usecases {
        pub use crate::domain::usecases::monthly_pnl_usecase::MonthlyPnlUsecase;
    }
}
