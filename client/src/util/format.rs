//! Display formatting for distances, durations and rupee amounts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `"350 m"` below a kilometre, `"1.5 km"` above.
pub fn format_distance_m(metres: u32) -> String {
    if metres < 1000 {
        format!("{metres} m")
    } else {
        format!("{:.1} km", f64::from(metres) / 1000.0)
    }
}

pub fn format_km(km: f64) -> String {
    format!("{km:.1} km")
}

/// `"14 min"`, or `"1 h 05 min"` from an hour up.
pub fn format_eta(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    format!("{} h {:02} min", minutes / 60, minutes % 60)
}

/// Rupee amount with Indian digit grouping: `₹1,25,000`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{tail}", groups.join(","))
}

pub fn format_age_days(days: u32) -> String {
    match days {
        0 => "Reported today".to_owned(),
        1 => "Reported yesterday".to_owned(),
        n => format!("Reported {n} days ago"),
    }
}
