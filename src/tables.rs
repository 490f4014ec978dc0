use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use solar_sizer::{
    catalog::Catalog,
    core::{
        SizingResult,
        Storage,
        battery_bank::BatteryBank,
        cost::CostBreakdown,
        finance::{FinancialProjection, Payback},
        off_grid::OffGridBank,
    },
    quantity::cost::Cost,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

/// Fraction as a whole percentage.
fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn value_cell(value: impl ToString) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

fn position_color(position: Cost) -> Color {
    if position.0 >= 0.0 { Color::Green } else { Color::Red }
}

pub fn build_summary_table(result: &SizingResult) -> Table {
    let generation = &result.generation;
    let finance = &result.finance;

    let mut table = new_table();
    table.set_header(vec!["", "Value"]);
    table.add_row(vec![Cell::new("Topology"), value_cell(result.topology)]);
    table.add_row(vec![Cell::new("Tariff"), value_cell(result.tariff)]);
    table.add_row(vec![Cell::new("Total demand"), value_cell(generation.total_demand)]);
    table.add_row(vec![
        Cell::new("Vehicle demand").add_attribute(Attribute::Dim),
        value_cell(result.vehicle.monthly_consumption).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![Cell::new("Required capacity"), value_cell(generation.required_capacity)]);
    table.add_row(vec![Cell::new("Panels"), value_cell(generation.panel_count)]);
    table.add_row(vec![
        Cell::new("Installed capacity"),
        value_cell(generation.installed_capacity).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Monthly generation"), value_cell(generation.monthly_generation)]);
    table.add_row(vec![Cell::new("Area"), value_cell(generation.area)]);
    table.add_row(vec![Cell::new("Availability floor"), value_cell(result.availability.floor)]);
    table.add_row(vec![Cell::new("Bill after"), value_cell(result.monthly_bill_after)]);
    table.add_row(vec![
        Cell::new("Total investment"),
        value_cell(finance.total_investment).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Annual bill savings"), value_cell(finance.annual_bill_savings)]);
    table.add_row(vec![
        Cell::new("Annual vehicle savings"),
        value_cell(finance.annual_vehicle_savings),
    ]);
    table.add_row(vec![
        Cell::new("Annual savings"),
        value_cell(finance.annual_savings).fg(position_color(finance.annual_savings)),
    ]);
    table.add_row(vec![
        Cell::new("Payback"),
        value_cell(finance.payback).fg(match finance.payback {
            Payback::Years(_) => Color::Reset,
            Payback::Unbounded => Color::Red,
        }),
    ]);
    table.add_row(vec![
        Cell::new(format!("Net savings over {} years", finance.horizon_years)),
        value_cell(finance.net_savings).fg(position_color(finance.net_savings)),
    ]);
    table
}

pub fn build_costs_table(costs: &CostBreakdown) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Item", "Cost", "Share"]);
    for (item, cost) in costs.items() {
        let share = if costs.total.is_positive() { cost / costs.total } else { 0.0 };
        table.add_row(vec![
            Cell::new(item),
            value_cell(cost),
            value_cell(percent(share)).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        value_cell(costs.total).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table
}

/// Build the storage table, `None` for the grid-tied topology.
pub fn build_storage_table(storage: &Storage) -> Option<Table> {
    match storage {
        Storage::None => None,
        Storage::BatteryBank(bank) => Some(build_battery_bank_table(bank)),
        Storage::OffGrid(bank) => Some(build_off_grid_table(bank)),
    }
}

fn build_battery_bank_table(bank: &BatteryBank) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Battery bank", "Value"]);
    table.add_row(vec![Cell::new("Chemistry"), value_cell(&bank.chemistry_name)]);
    table.add_row(vec![
        Cell::new("Depth of discharge"),
        value_cell(percent(bank.effective_depth_of_discharge)),
    ]);
    table.add_row(vec![Cell::new("Required energy"), value_cell(bank.required_energy)]);
    table.add_row(vec![Cell::new("System voltage"), value_cell(bank.system_voltage)]);
    table.add_row(vec![
        Cell::new("Wiring"),
        value_cell(format!("{} × {} in series", bank.strings, bank.units_per_string)),
    ]);
    table.add_row(vec![Cell::new("Units"), value_cell(bank.unit_count)]);
    table.add_row(vec![Cell::new("Total capacity"), value_cell(bank.total_capacity)]);
    table.add_row(vec![Cell::new("Usable capacity"), value_cell(bank.usable_capacity)]);
    table.add_row(vec![
        Cell::new("Cost"),
        value_cell(bank.cost).add_attribute(Attribute::Bold),
    ]);
    table
}

fn build_off_grid_table(bank: &OffGridBank) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Off-grid reserve", "Value"]);
    table.add_row(vec![
        Cell::new("Depth of discharge"),
        value_cell(percent(bank.effective_depth_of_discharge)),
    ]);
    table.add_row(vec![Cell::new("Reserve"), value_cell(bank.reserve)]);
    table.add_row(vec![Cell::new("Batteries"), value_cell(bank.battery_count)]);
    table.add_row(vec![Cell::new("Extra panels"), value_cell(bank.supplemental_panel_count)]);
    table.add_row(vec![Cell::new("Battery cost"), value_cell(bank.battery_cost)]);
    table.add_row(vec![Cell::new("Panel cost"), value_cell(bank.panel_cost)]);
    table.add_row(vec![Cell::new("Controller cost"), value_cell(bank.controller_cost)]);
    table.add_row(vec![
        Cell::new("Cost"),
        value_cell(bank.cost).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_cash_flow_table(finance: &FinancialProjection) -> Table {
    let break_even_year = finance.break_even_year();
    let mut table = new_table();
    table.set_header(vec!["Year", "Position"]);
    for point in finance.cash_flow() {
        let year_cell = Cell::new(point.year).set_alignment(CellAlignment::Right);
        let year_cell = if Some(point.year) == break_even_year {
            year_cell.add_attribute(Attribute::Bold)
        } else {
            year_cell.add_attribute(Attribute::Dim)
        };
        table.add_row(vec![
            year_cell,
            value_cell(point.position.round_to_cents()).fg(position_color(point.position)),
        ]);
    }
    table
}

pub fn build_battery_catalog_table(catalog: &Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "ID",
        "Name",
        "Capacity",
        "Voltage",
        "Max DoD",
        "Efficiency",
        "Cost",
        "Cycles",
        "Warranty",
    ]);
    for (id, chemistry) in &catalog.batteries {
        table.add_row(vec![
            Cell::new(id).add_attribute(Attribute::Bold),
            Cell::new(&chemistry.name),
            value_cell(chemistry.capacity),
            value_cell(chemistry.voltage),
            value_cell(percent(chemistry.max_depth_of_discharge)),
            value_cell(percent(chemistry.efficiency)),
            value_cell(chemistry.cost),
            value_cell(chemistry.cycles).add_attribute(Attribute::Dim),
            value_cell(chemistry.warranty).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_vehicle_catalog_table(catalog: &Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Category", "Consumption"]);
    for (id, model) in &catalog.vehicles {
        table.add_row(vec![
            Cell::new(id).add_attribute(Attribute::Bold),
            Cell::new(&model.name),
            Cell::new(model.category).add_attribute(Attribute::Dim),
            value_cell(model.consumption),
        ]);
    }
    table
}
