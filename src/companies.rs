//! The fixed company directory backing the dashboard's left panel.

use serde::Serialize;

/// A company listed in the dashboard directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Company {
    /// Display name.
    pub name: &'static str,
    /// Exchange ticker symbol.
    pub ticker: &'static str,
}

/// The ten companies served by `/api/companies`, in insertion order.
pub const COMPANIES: [Company; 10] = [
    Company {
        name: "Britannia Industries Ltd.",
        ticker: "BRITANNIA.NS",
    },
    Company {
        name: "Microsoft Corp.",
        ticker: "MSFT",
    },
    Company {
        name: "Amazon.com Inc.",
        ticker: "AMZN",
    },
    Company {
        name: "NVIDIA Corp.",
        ticker: "NVDA",
    },
    Company {
        name: "Alphabet Inc. (Google)",
        ticker: "GOOGL",
    },
    Company {
        name: "Tesla, Inc.",
        ticker: "TSLA",
    },
    Company {
        name: "Meta Platforms, Inc.",
        ticker: "META",
    },
    Company {
        name: "Berkshire Hathaway Inc.",
        ticker: "BRK-B",
    },
    Company {
        name: "Eli Lilly and Company",
        ticker: "LLY",
    },
    Company {
        name: "JPMorgan Chase & Co.",
        ticker: "JPM",
    },
];
