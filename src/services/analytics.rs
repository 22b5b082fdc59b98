//! Dashboard aggregates folded from paid invoices and expenses.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::domain::invoice::PaymentStatus;
use crate::dto::analytics::{DailyRevenue, FinancialSummary, MonthlyRevenue, TopCustomer};
use crate::repository::{
    CustomerReader, ExpenseListQuery, ExpenseReader, InvoiceListQuery, InvoiceReader,
};
use crate::services::ServiceResult;

/// Window caps; the query string is untrusted and a huge window would
/// allocate a bucket per day or overflow the date arithmetic.
const MAX_WINDOW_DAYS: u32 = 366;
const MAX_WINDOW_MONTHS: u32 = 60;

fn paid_invoices<R>(repo: &R) -> ServiceResult<Vec<crate::domain::invoice::Invoice>>
where
    R: InvoiceReader + ?Sized,
{
    let (_, invoices) =
        repo.list_invoices(InvoiceListQuery::new().payment_status(PaymentStatus::Paid))?;
    Ok(invoices)
}

/// Revenue per day over the trailing window, zero-filled so charts render
/// a continuous axis.
pub fn daily_revenue<R>(repo: &R, days: u32) -> ServiceResult<Vec<DailyRevenue>>
where
    R: InvoiceReader + ?Sized,
{
    let days = days.clamp(1, MAX_WINDOW_DAYS);
    let today = Utc::now().date_naive();
    let start = today - Duration::days(i64::from(days) - 1);

    let mut buckets: BTreeMap<NaiveDate, (i64, usize)> = (0..days)
        .map(|offset| (start + Duration::days(i64::from(offset)), (0, 0)))
        .collect();

    for invoice in paid_invoices(repo)? {
        let date = invoice.created_at.date();
        if let Some((revenue, count)) = buckets.get_mut(&date) {
            *revenue += invoice.total;
            *count += 1;
        }
    }

    Ok(buckets
        .into_iter()
        .map(|(date, (revenue, invoices))| DailyRevenue {
            date,
            revenue,
            invoices,
        })
        .collect())
}

/// Revenue per calendar month over the trailing `months` window.
pub fn monthly_revenue<R>(repo: &R, months: u32) -> ServiceResult<Vec<MonthlyRevenue>>
where
    R: InvoiceReader + ?Sized,
{
    let months = months.clamp(1, MAX_WINDOW_MONTHS);
    let today = Utc::now().date_naive();
    let mut keys = Vec::with_capacity(months as usize);
    let (mut year, mut month) = (today.year(), today.month());
    for _ in 0..months {
        keys.push(format!("{year:04}-{month:02}"));
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    keys.reverse();

    let mut buckets: BTreeMap<String, (i64, usize)> =
        keys.iter().cloned().map(|key| (key, (0, 0))).collect();

    for invoice in paid_invoices(repo)? {
        let date = invoice.created_at.date();
        let key = format!("{:04}-{:02}", date.year(), date.month());
        if let Some((revenue, count)) = buckets.get_mut(&key) {
            *revenue += invoice.total;
            *count += 1;
        }
    }

    Ok(keys
        .into_iter()
        .map(|month| {
            let (revenue, invoices) = buckets[&month];
            MonthlyRevenue {
                month,
                revenue,
                invoices,
            }
        })
        .collect())
}

/// Customers ranked by lifetime paid revenue.
pub fn top_customers<R>(repo: &R, limit: usize) -> ServiceResult<Vec<TopCustomer>>
where
    R: InvoiceReader + CustomerReader + ?Sized,
{
    let mut totals: HashMap<i32, (i64, usize)> = HashMap::new();
    for invoice in paid_invoices(repo)? {
        let entry = totals.entry(invoice.customer_id).or_default();
        entry.0 += invoice.total;
        entry.1 += 1;
    }

    let names: HashMap<i32, String> = repo
        .list_customers()?
        .into_iter()
        .map(|customer| (customer.id, customer.name))
        .collect();

    let mut ranked: Vec<TopCustomer> = totals
        .into_iter()
        .map(|(customer_id, (revenue, invoices))| TopCustomer {
            customer_id,
            name: names
                .get(&customer_id)
                .cloned()
                .unwrap_or_else(|| format!("Customer #{customer_id}")),
            revenue,
            invoices,
        })
        .collect();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue).then(a.customer_id.cmp(&b.customer_id)));
    ranked.truncate(limit);

    Ok(ranked)
}

/// Paid revenue against recorded expenses over an optional date range.
pub fn financial_summary<R>(
    repo: &R,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> ServiceResult<FinancialSummary>
where
    R: InvoiceReader + ExpenseReader + ?Sized,
{
    let in_range = |date: NaiveDate| {
        from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
    };

    let revenue: i64 = paid_invoices(repo)?
        .into_iter()
        .filter(|invoice| in_range(invoice.created_at.date()))
        .map(|invoice| invoice.total)
        .sum();

    let mut expense_query = ExpenseListQuery::new();
    if let Some(from) = from {
        expense_query = expense_query.from(from);
    }
    if let Some(to) = to {
        expense_query = expense_query.to(to);
    }
    let expenses: i64 = repo
        .list_expenses(expense_query)?
        .into_iter()
        .map(|expense| expense.amount)
        .sum();

    Ok(FinancialSummary {
        revenue,
        expenses,
        net: revenue - expenses,
    })
}
