//! Trailing-twelve-month dividend yield series.
//!
//! ## Formula
//!
//! For every price `p` after the interval start:
//!
//! ```text
//! window(p)  = { dividends d : p.date - 1 year < d.date < p.date }
//! yield(p)   = Σ per_share(d) × 100 / (p.value / quote_divider)
//! ```
//!
//! Both window ends are exclusive. Every selected price produces a point,
//! with a yield of zero when the window holds no dividends.

use divyield_core::types::Date;
use divyield_core::ValueScale;
use divyield_portfolio::{AccountTransaction, Security, SecurityPrice};

use crate::config::{YieldConfig, ZeroPricePolicy};
use crate::dividends::{is_dividend_for, per_share_amount};
use crate::error::AnalyticsResult;
use crate::interval::ChartInterval;
use crate::series::{ChartSeries, YieldSeries};
use crate::sink::SeriesSink;
use crate::sources::{PriceSource, TransactionSource};

/// Dividend yield series of one security, computed on construction.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use divyield_analytics::{ChartInterval, DividendYield};
/// use divyield_core::types::{Currency, Date, Money};
/// use divyield_portfolio::prelude::*;
///
/// let price_date = Date::from_ymd(2023, 6, 1).unwrap();
/// // 100.00 EUR on the default 10^8 quote scale
/// let security = Security::new("Acme", Currency::EUR)
///     .with_prices([SecurityPrice::new(price_date, 10_000_000_000)]);
///
/// let paid = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// // 40.00 EUR for 10 shares
/// let dividend = AccountTransaction::new(
///     AccountTransactionType::Dividends,
///     paid,
///     Money::new(4_000, Currency::EUR),
/// )
/// .with_security(security.id())
/// .with_shares(1_000_000_000);
///
/// let account = Account::new("Broker", Currency::EUR)
///     .with_transactions([dividend])
///     .unwrap();
/// let client = Client::new().with_account(account);
///
/// let dy = DividendYield::new(&client, Some(&security), ChartInterval::unbounded());
/// assert_eq!(dy.series().values(), [4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DividendYield {
    series: YieldSeries,
}

impl DividendYield {
    /// Computes the series with the default configuration.
    ///
    /// An absent security yields an empty series.
    #[must_use]
    pub fn new<T>(transactions: &T, security: Option<&Security>, interval: ChartInterval) -> Self
    where
        T: TransactionSource + ?Sized,
    {
        let config = YieldConfig::default();
        let series = security.map_or_else(YieldSeries::default, |security| {
            calculate_dividend_yield(transactions, security, interval, &config)
        });
        Self { series }
    }

    /// Computes the series with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate, which includes
    /// requesting the investment basis.
    pub fn with_config<T>(
        transactions: &T,
        security: Option<&Security>,
        interval: ChartInterval,
        config: &YieldConfig,
    ) -> AnalyticsResult<Self>
    where
        T: TransactionSource + ?Sized,
    {
        config.validate()?;
        let series = security.map_or_else(YieldSeries::default, |security| {
            calculate_dividend_yield(transactions, security, interval, config)
        });
        Ok(Self { series })
    }

    /// The computed series.
    #[must_use]
    pub fn series(&self) -> &YieldSeries {
        &self.series
    }

    /// The computed series as timeline instants and values.
    #[must_use]
    pub fn chart_series(&self) -> ChartSeries {
        self.series.to_chart_series()
    }

    /// Hands the chart series to a sink.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error.
    pub fn render_to(&self, sink: &mut dyn SeriesSink) -> AnalyticsResult<()> {
        sink.render(&self.chart_series())
    }
}

/// Computes the trailing dividend yield of a security.
///
/// Dividend transactions of other securities and other transaction types
/// are ignored. The price order of the source is kept; it is not checked.
#[must_use]
pub fn calculate_dividend_yield<T, P>(
    transactions: &T,
    prices: &P,
    interval: ChartInterval,
    config: &YieldConfig,
) -> YieldSeries
where
    T: TransactionSource + ?Sized,
    P: PriceSource + ?Sized,
{
    let security = prices.security_id();

    let prices: Vec<SecurityPrice> = prices
        .prices_including_latest()
        .into_iter()
        .filter(|p| interval.contains(p.date()))
        .collect();

    let dividends: Vec<&AccountTransaction> = transactions
        .transactions()
        .filter(|t| is_dividend_for(t, security))
        .collect();

    let mut series = YieldSeries::with_capacity(prices.len());

    for price in &prices {
        let amount = trailing_dividends_per_share(&dividends, price.date(), &config.scale);
        let value = amount * 100.0 / (price.value() as f64 / config.scale.quote_divider());

        if price.value() == 0 {
            match config.zero_price_policy {
                ZeroPricePolicy::NonFinite => {
                    tracing::warn!(%security, date = %price.date(), value, "Zero price in yield series");
                }
                ZeroPricePolicy::Skip => {
                    tracing::debug!(%security, date = %price.date(), "Skipping zero price");
                    continue;
                }
            }
        }

        series.push(price.date(), value);
    }

    tracing::debug!(
        %security,
        prices = prices.len(),
        dividends = dividends.len(),
        points = series.len(),
        "Computed dividend yield series"
    );

    series
}

/// Sum of per-share dividends paid strictly inside the year before `date`.
fn trailing_dividends_per_share(
    dividends: &[&AccountTransaction],
    date: Date,
    scale: &ValueScale,
) -> f64 {
    let year_before = date.add_years(-1).ok();

    dividends
        .iter()
        .filter(|t| {
            let paid = t.date();
            paid < date && year_before.map_or(true, |start| paid > start)
        })
        .map(|t| per_share_amount(t, scale))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YieldBasis;
    use crate::error::AnalyticsError;
    use crate::sink::MemorySink;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use divyield_core::types::{Currency, Money};
    use divyield_portfolio::{Account, AccountTransactionType, Client, LatestSecurityPrice};

    /// Scale on which a price value of 10_000 is 100.00 and 5.00 over
    /// 10 shares pays 1.00 per share.
    fn scenario_scale() -> ValueScale {
        ValueScale::new(100, 2, 100)
    }

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn dividend(security: &Security, date: Date, gross: i64, shares: i64) -> AccountTransaction {
        let at = NaiveDate::from(date).and_hms_opt(9, 0, 0).unwrap();
        AccountTransaction::new(
            AccountTransactionType::Dividends,
            at,
            Money::new(gross, Currency::EUR),
        )
        .with_security(security.id())
        .with_shares(shares)
    }

    fn client_with(transactions: Vec<AccountTransaction>) -> Client {
        let account = Account::new("Broker", Currency::EUR)
            .with_transactions(transactions)
            .unwrap();
        Client::new().with_account(account)
    }

    fn security_with(prices: &[(Date, i64)]) -> Security {
        Security::new("Acme", Currency::EUR)
            .with_prices(prices.iter().map(|&(date, value)| SecurityPrice::new(date, value)))
    }

    fn compute(client: &Client, security: &Security, interval: ChartInterval) -> YieldSeries {
        let config = YieldConfig::new().with_scale(scenario_scale());
        DividendYield::with_config(client, Some(security), interval, &config)
            .unwrap()
            .series()
            .clone()
    }

    #[test]
    fn test_no_dividends_yields_zero() {
        let security = security_with(&[(d(2023, 6, 1), 10_000)]);
        let series = compute(&Client::new(), &security, ChartInterval::unbounded());

        assert_eq!(series.dates(), [d(2023, 6, 1)]);
        assert_eq!(series.values(), [0.0]);
    }

    #[test]
    fn test_single_dividend_in_window() {
        let security = security_with(&[(d(2023, 6, 1), 10_000)]);
        let client = client_with(vec![dividend(&security, d(2023, 1, 1), 500, 10)]);
        let series = compute(&client, &security, ChartInterval::unbounded());

        assert_eq!(series.len(), 1);
        assert_relative_eq!(series.values()[0], 1.0);
    }

    #[test]
    fn test_window_ends_are_exclusive() {
        let security = security_with(&[(d(2023, 6, 1), 10_000)]);

        let year_before = client_with(vec![dividend(&security, d(2022, 6, 1), 500, 10)]);
        let series = compute(&year_before, &security, ChartInterval::unbounded());
        assert_eq!(series.values(), [0.0]);

        let same_day = client_with(vec![dividend(&security, d(2023, 6, 1), 500, 10)]);
        let series = compute(&same_day, &security, ChartInterval::unbounded());
        assert_eq!(series.values(), [0.0]);

        let just_inside = client_with(vec![
            dividend(&security, d(2022, 6, 2), 500, 10),
            dividend(&security, d(2023, 5, 31), 500, 10),
        ]);
        let series = compute(&just_inside, &security, ChartInterval::unbounded());
        assert_relative_eq!(series.values()[0], 2.0);
    }

    #[test]
    fn test_start_date_after_all_prices() {
        let security = security_with(&[(d(2023, 6, 1), 10_000), (d(2023, 6, 2), 10_000)]);
        let client = client_with(vec![dividend(&security, d(2023, 1, 1), 500, 10)]);
        let series = compute(&client, &security, ChartInterval::starting_after(d(2024, 1, 1)));
        assert!(series.is_empty());
    }

    #[test]
    fn test_start_date_is_exclusive() {
        let security = security_with(&[
            (d(2023, 6, 1), 10_000),
            (d(2023, 6, 2), 10_000),
            (d(2023, 6, 5), 10_000),
        ]);
        let series = compute(
            &Client::new(),
            &security,
            ChartInterval::starting_after(d(2023, 6, 2)),
        );
        assert_eq!(series.dates(), [d(2023, 6, 5)]);
    }

    #[test]
    fn test_absent_security_is_empty() {
        let client = Client::new();
        let dy = DividendYield::new(&client, None, ChartInterval::unbounded());
        assert!(dy.series().is_empty());
        assert!(dy.chart_series().is_empty());
    }

    #[test]
    fn test_ignores_other_securities_and_types() {
        let security = security_with(&[(d(2023, 6, 1), 10_000)]);
        let other = Security::new("Other", Currency::EUR);

        let interest = AccountTransaction::new(
            AccountTransactionType::Interest,
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            Money::new(500, Currency::EUR),
        )
        .with_security(security.id())
        .with_shares(10);

        let client = client_with(vec![
            dividend(&other, d(2023, 1, 1), 500, 10),
            interest,
            dividend(&security, d(2023, 3, 1), 500, 10),
        ]);
        let series = compute(&client, &security, ChartInterval::unbounded());
        assert_relative_eq!(series.values()[0], 1.0);
    }

    #[test]
    fn test_dividends_across_accounts_sum() {
        let security = security_with(&[(d(2023, 6, 1), 10_000)]);
        let first = Account::new("First", Currency::EUR)
            .with_transactions([dividend(&security, d(2023, 1, 1), 500, 10)])
            .unwrap();
        let second = Account::new("Second", Currency::EUR)
            .with_transactions([dividend(&security, d(2023, 4, 1), 1_000, 10)])
            .unwrap();
        let client = Client::new().with_account(first).with_account(second);

        let series = compute(&client, &security, ChartInterval::unbounded());
        assert_relative_eq!(series.values()[0], 3.0);
    }

    #[test]
    fn test_rolling_window_moves_with_price_date() {
        let security = security_with(&[
            (d(2023, 1, 1), 10_000),
            (d(2023, 3, 2), 10_000),
            (d(2024, 3, 1), 10_000),
            (d(2024, 3, 2), 20_000),
        ]);
        let client = client_with(vec![dividend(&security, d(2023, 3, 1), 500, 10)]);
        let series = compute(&client, &security, ChartInterval::unbounded());

        assert_eq!(series.values(), [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_latest_quote_is_included() {
        let security = security_with(&[(d(2023, 6, 1), 10_000)])
            .with_latest(LatestSecurityPrice::new(d(2023, 6, 2), 5_000));
        let client = client_with(vec![dividend(&security, d(2023, 1, 1), 500, 10)]);
        let series = compute(&client, &security, ChartInterval::unbounded());

        assert_eq!(series.dates(), [d(2023, 6, 1), d(2023, 6, 2)]);
        assert_relative_eq!(series.values()[1], 2.0);
    }

    #[test]
    fn test_zero_price_non_finite() {
        let security = security_with(&[(d(2023, 6, 1), 0), (d(2023, 6, 2), 0)]);
        let client = client_with(vec![dividend(&security, d(2023, 6, 1), 500, 10)]);
        let series = compute(&client, &security, ChartInterval::unbounded());

        assert_eq!(series.len(), 2);
        assert!(series.values()[0].is_nan());
        assert_eq!(series.values()[1], f64::INFINITY);
    }

    #[test]
    fn test_zero_price_skip() {
        let security = security_with(&[(d(2023, 6, 1), 0), (d(2023, 6, 2), 10_000)]);
        let config = YieldConfig::new()
            .with_scale(scenario_scale())
            .with_zero_price_policy(ZeroPricePolicy::Skip);
        let dy = DividendYield::with_config(
            &Client::new(),
            Some(&security),
            ChartInterval::unbounded(),
            &config,
        )
        .unwrap();

        assert_eq!(dy.series().dates(), [d(2023, 6, 2)]);
    }

    #[test]
    fn test_investment_basis_not_implemented() {
        let security = security_with(&[(d(2023, 6, 1), 10_000)]);
        let config = YieldConfig::new().with_basis(YieldBasis::Investment);
        let result = DividendYield::with_config(
            &Client::new(),
            Some(&security),
            ChartInterval::unbounded(),
            &config,
        );
        assert!(matches!(result, Err(AnalyticsError::NotImplemented { .. })));
    }

    #[test]
    fn test_render_to_sink() {
        let security = security_with(&[(d(2023, 6, 1), 10_000)]);
        let client = client_with(vec![dividend(&security, d(2023, 1, 1), 500, 10)]);
        let config = YieldConfig::new().with_scale(scenario_scale());
        let dy = DividendYield::with_config(
            &client,
            Some(&security),
            ChartInterval::unbounded(),
            &config,
        )
        .unwrap();

        let mut sink = MemorySink::new();
        dy.render_to(&mut sink).unwrap();
        let rendered = sink.last().unwrap();
        assert_eq!(rendered.dates, [d(2023, 6, 1).to_timeline()]);
        assert_relative_eq!(rendered.values[0], 1.0);
    }

    #[test]
    fn test_default_scale() {
        // 100.00 EUR price, 2.50 EUR for 1 share
        let security = security_with(&[(d(2023, 6, 1), 10_000_000_000)]);
        let client = client_with(vec![dividend(&security, d(2023, 1, 1), 250, 100_000_000)]);
        let dy = DividendYield::new(&client, Some(&security), ChartInterval::unbounded());
        assert_relative_eq!(dy.series().values()[0], 2.5);
    }
}
