use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TravelerBalance {
    pub traveler_id: String,
    pub paid_cents: i64,
    pub owed_cents: i64,
    pub net_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount_cents: i64,
}

/// Folds paid/owed amounts into one balance per traveler. BTreeMap keeps the
/// output ordered by traveler id (ids sort by creation time).
pub fn build_balances(paid: &[(String, i64)], owed: &[(String, i64)]) -> Vec<TravelerBalance> {
    let mut map: BTreeMap<String, (i64, i64)> = BTreeMap::new();
    for (traveler_id, amount) in paid {
        map.entry(traveler_id.clone()).or_default().0 += amount;
    }
    for (traveler_id, amount) in owed {
        map.entry(traveler_id.clone()).or_default().1 += amount;
    }
    map.into_iter()
        .map(|(traveler_id, (paid_cents, owed_cents))| TravelerBalance {
            traveler_id,
            paid_cents,
            owed_cents,
            net_cents: paid_cents - owed_cents,
        })
        .collect()
}

/// Greedy settlement: repeatedly match the largest debtor with the largest
/// creditor until every net is zero. Ties break on traveler id so the output
/// is stable for the same inputs.
pub fn settle(balances: &[TravelerBalance]) -> Vec<Transfer> {
    let mut debtors: Vec<(String, i64)> = balances
        .iter()
        .filter(|b| b.net_cents < 0)
        .map(|b| (b.traveler_id.clone(), -b.net_cents))
        .collect();
    let mut creditors: Vec<(String, i64)> = balances
        .iter()
        .filter(|b| b.net_cents > 0)
        .map(|b| (b.traveler_id.clone(), b.net_cents))
        .collect();

    let mut transfers = Vec::new();
    while !debtors.is_empty() && !creditors.is_empty() {
        let di = largest(&debtors);
        let ci = largest(&creditors);
        let amount = debtors[di].1.min(creditors[ci].1);

        transfers.push(Transfer {
            from: debtors[di].0.clone(),
            to: creditors[ci].0.clone(),
            amount_cents: amount,
        });

        debtors[di].1 -= amount;
        creditors[ci].1 -= amount;
        if debtors[di].1 == 0 {
            debtors.remove(di);
        }
        if let Some(ci) = creditors.iter().position(|c| c.1 == 0) {
            creditors.remove(ci);
        }
    }
    transfers
}

fn largest(entries: &[(String, i64)]) -> usize {
    let mut best = 0;
    for (i, entry) in entries.iter().enumerate().skip(1) {
        let (best_id, best_amount) = &entries[best];
        if entry.1 > *best_amount || (entry.1 == *best_amount && entry.0 < *best_id) {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(id: &str, paid: i64, owed: i64) -> TravelerBalance {
        TravelerBalance {
            traveler_id: id.to_string(),
            paid_cents: paid,
            owed_cents: owed,
            net_cents: paid - owed,
        }
    }

    #[test]
    fn balances_sum_paid_and_owed_per_traveler() {
        let paid = vec![("a".to_string(), 3000), ("a".to_string(), 1000)];
        let owed = vec![("a".to_string(), 2000), ("b".to_string(), 2000)];
        let balances = build_balances(&paid, &owed);
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].traveler_id, "a");
        assert_eq!(balances[0].paid_cents, 4000);
        assert_eq!(balances[0].net_cents, 2000);
        assert_eq!(balances[1].traveler_id, "b");
        assert_eq!(balances[1].net_cents, -2000);
    }

    #[test]
    fn two_person_settlement_is_one_transfer() {
        let transfers = settle(&[balance("a", 4000, 2000), balance("b", 0, 2000)]);
        assert_eq!(
            transfers,
            vec![Transfer {
                from: "b".to_string(),
                to: "a".to_string(),
                amount_cents: 2000,
            }]
        );
    }

    #[test]
    fn transfers_clear_all_balances() {
        let balances = vec![
            balance("a", 9000, 3000),
            balance("b", 0, 3000),
            balance("c", 0, 3000),
        ];
        let transfers = settle(&balances);

        let mut nets: BTreeMap<String, i64> = balances
            .iter()
            .map(|b| (b.traveler_id.clone(), b.net_cents))
            .collect();
        for t in &transfers {
            *nets.get_mut(&t.from).unwrap() += t.amount_cents;
            *nets.get_mut(&t.to).unwrap() -= t.amount_cents;
        }
        assert!(nets.values().all(|&n| n == 0), "nets left: {:?}", nets);
    }

    #[test]
    fn transfer_total_equals_positive_nets() {
        let balances = vec![
            balance("a", 5000, 1000),
            balance("b", 2000, 3000),
            balance("c", 0, 3000),
        ];
        let transfers = settle(&balances);
        let total: i64 = transfers.iter().map(|t| t.amount_cents).sum();
        assert_eq!(total, 4000);
    }

    #[test]
    fn settled_group_produces_no_transfers() {
        let transfers = settle(&[balance("a", 1000, 1000), balance("b", 500, 500)]);
        assert!(transfers.is_empty());
    }

    #[test]
    fn output_is_deterministic_on_ties() {
        let balances = vec![
            balance("b", 0, 1000),
            balance("a", 0, 1000),
            balance("c", 2000, 0),
        ];
        let first = settle(&balances);
        let second = settle(&balances);
        assert_eq!(first, second);
        // Equal debts: the smaller traveler id pays first.
        assert_eq!(first[0].from, "a");
        assert_eq!(first[1].from, "b");
    }
}
