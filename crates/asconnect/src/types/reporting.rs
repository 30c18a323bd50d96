//! Sales and trends report requests

use chrono::NaiveDate;
use serde::Serialize;

/// Report granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportFrequency {
    /// One day
    Daily,
    /// One week, ending on a Sunday
    Weekly,
    /// One calendar month
    Monthly,
    /// One calendar year
    Yearly,
}

/// Which sales report to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesReportType {
    /// App and in-app purchase sales
    Sales,
    /// Pre-orders
    PreOrder,
    /// Newsstand
    Newsstand,
    /// Subscription summary
    Subscription,
    /// Subscription events
    SubscriptionEvent,
    /// Subscriber activity
    Subscriber,
    /// Subscription offer code redemptions
    SubscriptionOfferCodeRedemption,
    /// Installs
    Installs,
    /// First annual
    FirstAnnual,
}

/// Level of detail within a report type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesReportSubType {
    /// Summary rows
    Summary,
    /// Detailed rows
    Detailed,
    /// Opt-in rows
    OptIn,
    /// Summary by install type
    SummaryInstallType,
    /// Summary by territory
    SummaryTerritory,
    /// Summary by channel
    SummaryChannel,
}

/// Query for `GET /v1/salesReports`.
///
/// The response is a gzip-compressed tab-separated file, so it is
/// downloaded through a byte sink rather than decoded.
#[derive(Debug, Clone, Serialize)]
pub struct SalesReportQuery {
    /// Granularity
    #[serde(rename = "filter[frequency]")]
    pub frequency: ReportFrequency,
    /// Report type
    #[serde(rename = "filter[reportType]")]
    pub report_type: SalesReportType,
    /// Report sub-type
    #[serde(rename = "filter[reportSubType]")]
    pub report_sub_type: SalesReportSubType,
    /// Vendor number from Payments and Financial Reports
    #[serde(rename = "filter[vendorNumber]")]
    pub vendor_number: String,
    /// Report date; the latest available report when absent
    #[serde(rename = "filter[reportDate]")]
    pub report_date: Option<String>,
    /// Report format version, e.g. `1_0`
    #[serde(rename = "filter[version]")]
    pub version: Option<String>,
}

impl SalesReportQuery {
    /// The latest report of the given kind for a vendor.
    pub fn new(
        vendor_number: impl Into<String>,
        frequency: ReportFrequency,
        report_type: SalesReportType,
        report_sub_type: SalesReportSubType,
    ) -> Self {
        Self {
            frequency,
            report_type,
            report_sub_type,
            vendor_number: vendor_number.into(),
            report_date: None,
            version: None,
        }
    }

    /// Request the report covering `date`.
    ///
    /// The date is rendered at the precision the frequency expects:
    /// `YYYY` for yearly, `YYYY-MM` for monthly and `YYYY-MM-DD` otherwise.
    pub fn date(mut self, date: NaiveDate) -> Self {
        let format = match self.frequency {
            ReportFrequency::Yearly => "%Y",
            ReportFrequency::Monthly => "%Y-%m",
            ReportFrequency::Daily | ReportFrequency::Weekly => "%Y-%m-%d",
        };
        self.report_date = Some(date.format(format).to_string());
        self
    }

    /// Request a specific report format version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}
