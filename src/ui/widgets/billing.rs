//! Revenue card with a live-looking transaction feed.

use leptos::prelude::*;

use crate::core::motion::{Float, float};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{target, use_animation_scope};

const FEED_LEN: usize = 3;
#[cfg(feature = "hydrate")]
const FEED_PERIOD_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: u32,
    pub client: String,
    /// Whole dollars
    pub amount: u32,
    pub paid: bool,
    pub when: &'static str,
}

fn seed_feed() -> Vec<Transaction> {
    [
        ("Acme Corp", 4_200, true, "Just now"),
        ("Global Tech", 2_850, true, "2m ago"),
        ("Stark Ind", 9_500, false, "5m ago"),
    ]
    .into_iter()
    .zip(0..)
    .map(|((client, amount, paid, when), id)| Transaction {
        id,
        client: client.to_string(),
        amount,
        paid,
        when,
    })
    .collect()
}

/// The `n`th synthetic arrival. Amounts are whole hundreds between
/// $1,000 and $5,900, cycling so consecutive rows differ.
pub fn arrival(n: u32) -> Transaction {
    Transaction {
        id: FEED_LEN as u32 + n,
        client: "New Client".to_string(),
        amount: 1_000 + ((n % 50) * 1_700 % 5_000) / 100 * 100,
        paid: true,
        when: "Just now",
    }
}

/// Put `entry` at the head of the feed, ageing the previous head and
/// keeping the feed at its fixed length.
pub fn push_arrival(feed: &mut Vec<Transaction>, entry: Transaction) {
    if let Some(head) = feed.first_mut() {
        head.when = "1m ago";
    }
    feed.insert(0, entry);
    feed.truncate(FEED_LEN);
}

/// `$4,200` style amount.
pub fn dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[component]
pub fn BillingCard() -> impl IntoView {
    let feed = RwSignal::new(seed_feed());
    let card = NodeRef::<leptos::html::Div>::new();

    use_animation_scope(move |scope| {
        float(scope, target(card), Float { distance: 10.0, duration: 4.0 });
    });

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        Effect::new(move |_: Option<Interval>| {
            let mut arrivals = 0;
            Interval::new(FEED_PERIOD_MS, move || {
                let entry = arrival(arrivals);
                arrivals += 1;
                feed.update(|feed| push_arrival(feed, entry));
            })
        });
    }

    view! {
        <div node_ref=card class="relative w-full max-w-md mx-auto rounded-3xl border border-white/10 bg-card/80 backdrop-blur-xl p-6 shadow-2xl">
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-3">
                    <div class="p-2.5 rounded-xl bg-accent-primary/10 border border-accent-primary/20">
                        <Icon name=icons::CREDIT_CARD class="w-5 h-5" />
                    </div>
                    <div>
                        <h4 class="text-white font-semibold tracking-tight">"Revenue Stream"</h4>
                        <p class="text-secondary text-xs">"Real-time collections"</p>
                    </div>
                </div>
                <span class="flex items-center gap-1.5 px-2.5 py-1 rounded-full bg-emerald-500/10 border border-emerald-500/20 text-emerald-400 text-[10px] font-semibold">
                    <span class="w-1.5 h-1.5 rounded-full bg-emerald-400 animate-pulse"></span>
                    "Active"
                </span>
            </div>

            <div class="grid grid-cols-2 gap-3 mb-6">
                <div class="rounded-2xl bg-white/[0.03] border border-white/5 p-4">
                    <p class="text-[10px] uppercase tracking-wider text-secondary mb-1">"MRR"</p>
                    <div class="flex items-baseline gap-2">
                        <span class="text-white text-2xl font-bold">"$142k"</span>
                        <span class="flex items-center gap-0.5 text-emerald-400 text-[10px] font-semibold">
                            <Icon name=icons::TRENDING_UP class="w-3 h-3" />
                            "+12%"
                        </span>
                    </div>
                </div>
                <div class="rounded-2xl bg-white/[0.03] border border-white/5 p-4">
                    <p class="text-[10px] uppercase tracking-wider text-secondary mb-1">"Processing"</p>
                    <span class="text-white text-2xl font-bold">"$8.4k"</span>
                </div>
            </div>

            <div class="space-y-2 mb-6">
                <For
                    each=move || feed.get()
                    key=|tx: &Transaction| tx.id
                    children=move |tx: Transaction| {
                        let status_class = if tx.paid {
                            "text-[10px] font-semibold text-emerald-400"
                        } else {
                            "text-[10px] font-semibold text-amber-400"
                        };
                        let id = tx.id;
                        let when = move || {
                            feed.with(|feed| feed.iter().find(|t| t.id == id).map(|t| t.when).unwrap_or_default())
                        };
                        view! {
                            <div class="flex items-center justify-between px-3 py-2.5 rounded-xl bg-white/[0.03] border border-white/5 animate-fade-in">
                                <div class="flex items-center gap-3">
                                    <div class="w-8 h-8 rounded-full bg-white/5 flex items-center justify-center text-[10px] font-bold text-white/70">
                                        {tx.client.chars().next().unwrap_or('?').to_string()}
                                    </div>
                                    <div>
                                        <p class="text-white text-sm font-medium">{tx.client.clone()}</p>
                                        <p class="text-secondary text-[10px]">{when}</p>
                                    </div>
                                </div>
                                <div class="text-right">
                                    <p class="text-white text-sm font-mono">{dollars(tx.amount)}</p>
                                    <p class=status_class>{if tx.paid { "Paid" } else { "Processing" }}</p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="flex items-center justify-between rounded-2xl bg-gradient-to-r from-accent-primary/15 to-accent-secondary/10 border border-accent-primary/20 p-4">
                <div>
                    <p class="text-[10px] uppercase tracking-wider text-secondary">"Payout Scheduled"</p>
                    <p class="text-white text-lg font-bold font-mono">"$42,500.00"</p>
                </div>
                <span class="text-xs text-white/60">"Arrives tomorrow"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_keeps_three_rows_newest_first() {
        let mut feed = seed_feed();
        push_arrival(&mut feed, arrival(0));
        push_arrival(&mut feed, arrival(1));

        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].id, 4);
        assert_eq!(feed[0].when, "Just now");
        assert_eq!(feed[1].id, 3);
        assert_eq!(feed[1].when, "1m ago");
        assert_eq!(feed[2].client, "Acme Corp");
    }

    #[test]
    fn test_arrivals_are_whole_hundreds_in_range() {
        for n in 0..20 {
            let tx = arrival(n);
            assert_eq!(tx.amount % 100, 0);
            assert!((1_000..=5_900).contains(&tx.amount));
        }
        assert_ne!(arrival(0).amount, arrival(1).amount);
    }

    #[test]
    fn test_dollars() {
        assert_eq!(dollars(950), "$950");
        assert_eq!(dollars(4_200), "$4,200");
        assert_eq!(dollars(1_234_567), "$1,234,567");
    }
}
