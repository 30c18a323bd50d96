//! Sales report downloads

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::ResponseMeta,
    types::SalesReportQuery,
};
use http::{Method, header};
use tokio::io::AsyncWrite;

/// Media type of a gzip-compressed report.
pub const GZIP_MEDIA_TYPE: &str = "application/a-gzip";

/// Reporting resource.
#[derive(Debug, Clone)]
pub struct Reporting {
    client: Client,
}

impl Reporting {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /v1/salesReports`
    ///
    /// Streams the gzip-compressed report into `sink` as it arrives. The
    /// bytes are written unmodified; decompress them with any gzip reader.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use asconnect::Client;
    /// # use asconnect::types::{ReportFrequency, SalesReportQuery, SalesReportSubType, SalesReportType};
    /// # async fn example(client: Client) -> asconnect::Result<()> {
    /// let query = SalesReportQuery::new(
    ///     "85000000",
    ///     ReportFrequency::Daily,
    ///     SalesReportType::Sales,
    ///     SalesReportSubType::Summary,
    /// );
    /// let mut file = tokio::fs::File::create("sales.txt.gz").await?;
    /// client.reporting().download_sales_report(&query, &mut file).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download_sales_report<W>(
        &self,
        query: &SalesReportQuery,
        sink: &mut W,
    ) -> Result<ResponseMeta>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let request = self
            .client
            .request(Method::GET, "v1/salesReports")?
            .query(query)?
            .header(header::ACCEPT.as_str(), GZIP_MEDIA_TYPE);
        self.client.execute_to(request, sink).await
    }
}

impl Resource for Reporting {
    fn client(&self) -> &Client {
        &self.client
    }
}
