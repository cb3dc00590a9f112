// src/services/totals.rs

use rust_decimal::{Decimal, RoundingStrategy};

use crate::common::error::AppError;

/// Item de linha como chega da API, antes de persistir.
/// Usado igualmente por faturas e orçamentos.
#[derive(Debug, Clone)]
pub struct LineItemInput {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Percentual aplicado sobre o valor do item (16 = 16%).
    pub tax_rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTotals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

// Arredondamento padrão de moeda: 2 casas, meio-termo para longe do zero.
fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn check_item(item: &LineItemInput) -> Result<(), AppError> {
    if item.quantity < Decimal::ZERO {
        return Err(AppError::InvalidLineItem("a quantidade não pode ser negativa"));
    }
    if item.unit_price < Decimal::ZERO {
        return Err(AppError::InvalidLineItem("o preço unitário não pode ser negativo"));
    }
    if item.tax_rate < Decimal::ZERO {
        return Err(AppError::InvalidLineItem("a alíquota não pode ser negativa"));
    }
    Ok(())
}

/// Valor de um item: quantidade × preço unitário, arredondado.
pub fn line_amount(item: &LineItemInput) -> Result<Decimal, AppError> {
    check_item(item)?;
    Ok(round_currency(item.quantity * item.unit_price))
}

/// Calcula subtotal, imposto e total de uma lista de itens.
///
/// Função pura, compartilhada entre a criação/atualização de faturas e de
/// orçamentos. Garante `total_amount == subtotal + tax_amount` exatamente.
pub fn calculate(items: &[LineItemInput]) -> Result<DocumentTotals, AppError> {
    let mut subtotal = Decimal::ZERO;
    let mut tax_amount = Decimal::ZERO;

    for item in items {
        check_item(item)?;
        let amount = item.quantity * item.unit_price;
        subtotal += amount;
        tax_amount += amount * item.tax_rate / Decimal::ONE_HUNDRED;
    }

    let subtotal = round_currency(subtotal);
    let tax_amount = round_currency(tax_amount);

    Ok(DocumentTotals {
        subtotal,
        tax_amount,
        total_amount: subtotal + tax_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: Decimal, unit_price: Decimal, tax_rate: Decimal) -> LineItemInput {
        LineItemInput {
            description: "Consultoria".to_string(),
            quantity,
            unit_price,
            tax_rate,
        }
    }

    #[test]
    fn computes_totals_with_mixed_tax_rates() {
        // 2 x 100 @ 16% + 1 x 50 @ 0% => subtotal 250, imposto 32, total 282
        let items = vec![
            item(Decimal::from(2), Decimal::from(100), Decimal::from(16)),
            item(Decimal::from(1), Decimal::from(50), Decimal::ZERO),
        ];

        let totals = calculate(&items).unwrap();
        assert_eq!(totals.subtotal, Decimal::from(250));
        assert_eq!(totals.tax_amount, Decimal::from(32));
        assert_eq!(totals.total_amount, Decimal::from(282));
    }

    #[test]
    fn empty_list_yields_zero_totals() {
        let totals = calculate(&[]).unwrap();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax_amount, Decimal::ZERO);
        assert_eq!(totals.total_amount, Decimal::ZERO);
    }

    #[test]
    fn total_is_exactly_subtotal_plus_tax() {
        let items = vec![
            item(Decimal::new(35, 1), Decimal::new(9999, 2), Decimal::from(7)),
            item(Decimal::from(12), Decimal::new(1250, 2), Decimal::new(165, 1)),
            item(Decimal::from(1), Decimal::new(1, 2), Decimal::from(100)),
        ];

        let totals = calculate(&items).unwrap();
        assert_eq!(totals.total_amount, totals.subtotal + totals.tax_amount);
        // Arredondado a 2 casas
        assert!(totals.subtotal.scale() <= 2);
        assert!(totals.tax_amount.scale() <= 2);
    }

    #[test]
    fn line_amount_is_quantity_times_price_rounded() {
        let li = item(Decimal::from(3), Decimal::new(3333, 3), Decimal::ZERO); // 3 x 3.333
        assert_eq!(line_amount(&li).unwrap(), Decimal::new(1000, 2)); // 10.00
    }

    #[test]
    fn rejects_negative_quantity() {
        let items = vec![item(Decimal::from(-1), Decimal::from(10), Decimal::ZERO)];
        assert!(matches!(
            calculate(&items),
            Err(AppError::InvalidLineItem(_))
        ));
    }

    #[test]
    fn rejects_negative_price_and_rate() {
        let bad_price = item(Decimal::from(1), Decimal::from(-10), Decimal::ZERO);
        assert!(matches!(
            line_amount(&bad_price),
            Err(AppError::InvalidLineItem(_))
        ));

        let bad_rate = vec![item(Decimal::from(1), Decimal::from(10), Decimal::from(-5))];
        assert!(matches!(
            calculate(&bad_rate),
            Err(AppError::InvalidLineItem(_))
        ));
    }

    #[test]
    fn zero_quantity_items_are_allowed() {
        let items = vec![item(Decimal::ZERO, Decimal::from(100), Decimal::from(16))];
        let totals = calculate(&items).unwrap();
        assert_eq!(totals.total_amount, Decimal::ZERO);
    }
}
