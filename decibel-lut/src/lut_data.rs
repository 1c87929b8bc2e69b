// Generated by decibel-lut-gen, regenerate instead of editing by hand.
// 2048 gains from -96.00 dB to 12.00 dB in steps of 0.052760 dB.

#![allow(clippy::excessive_precision)]

pub const DB_LUT_DATA: [f32; 2048] = [
    1.58489311e-5,  //  -96.00 dB
    1.59454958e-5,  //  -95.95 dB
    1.60426462e-5,  //  -95.89 dB
    1.61403896e-5,  //  -95.84 dB
    1.62387296e-5,  //  -95.79 dB
    1.63376662e-5,  //  -95.74 dB
    1.64372068e-5,  //  -95.68 dB
    1.65373549e-5,  //  -95.63 dB
    1.66381124e-5,  //  -95.58 dB
    1.67394846e-5,  //  -95.53 dB
    1.68414736e-5,  //  -95.47 dB
    1.69440827e-5,  //  -95.42 dB
    1.70473195e-5,  //  -95.37 dB
    1.71511838e-5,  //  -95.31 dB
    1.72556811e-5,  //  -95.26 dB
    1.73608150e-5,  //  -95.21 dB
    1.74665893e-5,  //  -95.16 dB
    1.75730092e-5,  //  -95.10 dB
    1.76800750e-5,  //  -95.05 dB
    1.77877955e-5,  //  -95.00 dB
    1.78961709e-5,  //  -94.94 dB
    1.80052084e-5,  //  -94.89 dB
    1.81149080e-5,  //  -94.84 dB
    1.82252770e-5,  //  -94.79 dB
    1.83363190e-5,  //  -94.73 dB
    1.84480377e-5,  //  -94.68 dB
    1.85604367e-5,  //  -94.63 dB
    1.86735197e-5,  //  -94.58 dB
    1.87872920e-5,  //  -94.52 dB
    1.89017574e-5,  //  -94.47 dB
    1.90169212e-5,  //  -94.42 dB
    1.91327854e-5,  //  -94.36 dB
    1.92493571e-5,  //  -94.31 dB
    1.93666383e-5,  //  -94.26 dB
    1.94846325e-5,  //  -94.21 dB
    1.96033470e-5,  //  -94.15 dB
    1.97227855e-5,  //  -94.10 dB
    1.98429516e-5,  //  -94.05 dB
    1.99638489e-5,  //  -94.00 dB
    2.00854829e-5,  //  -93.94 dB
    2.02078572e-5,  //  -93.89 dB
    2.03309792e-5,  //  -93.84 dB
    2.04548487e-5,  //  -93.78 dB
    2.05794749e-5,  //  -93.73 dB
    2.07048597e-5,  //  -93.68 dB
    2.08310084e-5,  //  -93.63 dB
    2.09579266e-5,  //  -93.57 dB
    2.10856178e-5,  //  -93.52 dB
    2.12140858e-5,  //  -93.47 dB
    2.13433377e-5,  //  -93.41 dB
    2.14733773e-5,  //  -93.36 dB
    2.16042081e-5,  //  -93.31 dB
    2.17358356e-5,  //  -93.26 dB
    2.18682671e-5,  //  -93.20 dB
    2.20015045e-5,  //  -93.15 dB
    2.21355531e-5,  //  -93.10 dB
    2.22704184e-5,  //  -93.05 dB
    2.24061059e-5,  //  -92.99 dB
    2.25426211e-5,  //  -92.94 dB
    2.26799657e-5,  //  -92.89 dB
    2.28181489e-5,  //  -92.83 dB
    2.29571742e-5,  //  -92.78 dB
    2.30970454e-5,  //  -92.73 dB
    2.32377697e-5,  //  -92.68 dB
    2.33793508e-5,  //  -92.62 dB
    2.35217940e-5,  //  -92.57 dB
    2.36651067e-5,  //  -92.52 dB
    2.38092907e-5,  //  -92.47 dB
    2.39543533e-5,  //  -92.41 dB
    2.41003017e-5,  //  -92.36 dB
    2.42471378e-5,  //  -92.31 dB
    2.43948689e-5,  //  -92.25 dB
    2.45435003e-5,  //  -92.20 dB
    2.46930358e-5,  //  -92.15 dB
    2.48434844e-5,  //  -92.10 dB
    2.49948480e-5,  //  -92.04 dB
    2.51471356e-5,  //  -91.99 dB
    2.53003491e-5,  //  -91.94 dB
    2.54544975e-5,  //  -91.88 dB
    2.56095846e-5,  //  -91.83 dB
    2.57656175e-5,  //  -91.78 dB
    2.59225999e-5,  //  -91.73 dB
    2.60805391e-5,  //  -91.67 dB
    2.62394406e-5,  //  -91.62 dB
    2.63993097e-5,  //  -91.57 dB
    2.65601539e-5,  //  -91.52 dB
    2.67219766e-5,  //  -91.46 dB
    2.68847871e-5,  //  -91.41 dB
    2.70485889e-5,  //  -91.36 dB
    2.72133875e-5,  //  -91.30 dB
    2.73791920e-5,  //  -91.25 dB
    2.75460043e-5,  //  -91.20 dB
    2.77138352e-5,  //  -91.15 dB
    2.78826883e-5,  //  -91.09 dB
    2.80525692e-5,  //  -91.04 dB
    2.82234851e-5,  //  -90.99 dB
    2.83954432e-5,  //  -90.94 dB
    2.85684491e-5,  //  -90.88 dB
    2.87425082e-5,  //  -90.83 dB
    2.89176296e-5,  //  -90.78 dB
    2.90938151e-5,  //  -90.72 dB
    2.92710756e-5,  //  -90.67 dB
    2.94494166e-5,  //  -90.62 dB
    2.96288435e-5,  //  -90.57 dB
    2.98093637e-5,  //  -90.51 dB
    2.99909843e-5,  //  -90.46 dB
    3.01737109e-5,  //  -90.41 dB
    3.03575507e-5,  //  -90.35 dB
    3.05425092e-5,  //  -90.30 dB
    3.07285991e-5,  //  -90.25 dB
    3.09158204e-5,  //  -90.20 dB
    3.11041804e-5,  //  -90.14 dB
    3.12936900e-5,  //  -90.09 dB
    3.14843528e-5,  //  -90.04 dB
    3.16761798e-5,  //  -89.99 dB
    3.18691709e-5,  //  -89.93 dB
    3.20633408e-5,  //  -89.88 dB
    3.22586966e-5,  //  -89.83 dB
    3.24552384e-5,  //  -89.77 dB
    3.26529807e-5,  //  -89.72 dB
    3.28519236e-5,  //  -89.67 dB
    3.30520816e-5,  //  -89.62 dB
    3.32534582e-5,  //  -89.56 dB
    3.34560646e-5,  //  -89.51 dB
    3.36599005e-5,  //  -89.46 dB
    3.38649807e-5,  //  -89.40 dB
    3.40713123e-5,  //  -89.35 dB
    3.42788990e-5,  //  -89.30 dB
    3.44877517e-5,  //  -89.25 dB
    3.46978741e-5,  //  -89.19 dB
    3.49092807e-5,  //  -89.14 dB
    3.51219715e-5,  //  -89.09 dB
    3.53359610e-5,  //  -89.04 dB
    3.55512529e-5,  //  -88.98 dB
    3.57678582e-5,  //  -88.93 dB
    3.59857804e-5,  //  -88.88 dB
    3.62050305e-5,  //  -88.82 dB
    3.64256193e-5,  //  -88.77 dB
    3.66475506e-5,  //  -88.72 dB
    3.68708315e-5,  //  -88.67 dB
    3.70954767e-5,  //  -88.61 dB
    3.73214898e-5,  //  -88.56 dB
    3.75488780e-5,  //  -88.51 dB
    3.77776523e-5,  //  -88.46 dB
    3.80078236e-5,  //  -88.40 dB
    3.82393919e-5,  //  -88.35 dB
    3.84723753e-5,  //  -88.30 dB
    3.87067776e-5,  //  -88.24 dB
    3.89426059e-5,  //  -88.19 dB
    3.91798712e-5,  //  -88.14 dB
    3.94185845e-5,  //  -88.09 dB
    3.96587493e-5,  //  -88.03 dB
    3.99003802e-5,  //  -87.98 dB
    4.01434809e-5,  //  -87.93 dB
    4.03880658e-5,  //  -87.87 dB
    4.06341387e-5,  //  -87.82 dB
    4.08817104e-5,  //  -87.77 dB
    4.11307919e-5,  //  -87.72 dB
    4.13813905e-5,  //  -87.66 dB
    4.16335170e-5,  //  -87.61 dB
    4.18871787e-5,  //  -87.56 dB
    4.21423829e-5,  //  -87.51 dB
    4.23991441e-5,  //  -87.45 dB
    4.26574734e-5,  //  -87.40 dB
    4.29173706e-5,  //  -87.35 dB
    4.31788540e-5,  //  -87.29 dB
    4.34419308e-5,  //  -87.24 dB
    4.37066119e-5,  //  -87.19 dB
    4.39729047e-5,  //  -87.14 dB
    4.42408200e-5,  //  -87.08 dB
    4.45103651e-5,  //  -87.03 dB
    4.47815546e-5,  //  -86.98 dB
    4.50543957e-5,  //  -86.93 dB
    4.53288994e-5,  //  -86.87 dB
    4.56050766e-5,  //  -86.82 dB
    4.58829345e-5,  //  -86.77 dB
    4.61624877e-5,  //  -86.71 dB
    4.64437435e-5,  //  -86.66 dB
    4.67267128e-5,  //  -86.61 dB
    4.70114028e-5,  //  -86.56 dB
    4.72978318e-5,  //  -86.50 dB
    4.75860033e-5,  //  -86.45 dB
    4.78759321e-5,  //  -86.40 dB
    4.81676288e-5,  //  -86.34 dB
    4.84610973e-5,  //  -86.29 dB
    4.87563593e-5,  //  -86.24 dB
    4.90534185e-5,  //  -86.19 dB
    4.93522857e-5,  //  -86.13 dB
    4.96529756e-5,  //  -86.08 dB
    4.99554990e-5,  //  -86.03 dB
    5.02598632e-5,  //  -85.98 dB
    5.05660828e-5,  //  -85.92 dB
    5.08741687e-5,  //  -85.87 dB
    5.11841281e-5,  //  -85.82 dB
    5.14959793e-5,  //  -85.76 dB
    5.18097295e-5,  //  -85.71 dB
    5.21253933e-5,  //  -85.66 dB
    5.24429779e-5,  //  -85.61 dB
    5.27624979e-5,  //  -85.55 dB
    5.30839643e-5,  //  -85.50 dB
    5.34073915e-5,  //  -85.45 dB
    5.37327869e-5,  //  -85.40 dB
    5.40601686e-5,  //  -85.34 dB
    5.43895403e-5,  //  -85.29 dB
    5.47209202e-5,  //  -85.24 dB
    5.50543191e-5,  //  -85.18 dB
    5.53897517e-5,  //  -85.13 dB
    5.57272251e-5,  //  -85.08 dB
    5.60667540e-5,  //  -85.03 dB
    5.64083530e-5,  //  -84.97 dB
    5.67520328e-5,  //  -84.92 dB
    5.70978082e-5,  //  -84.87 dB
    5.74456899e-5,  //  -84.81 dB
    5.77956889e-5,  //  -84.76 dB
    5.81478234e-5,  //  -84.71 dB
    5.85021007e-5,  //  -84.66 dB
    5.88585390e-5,  //  -84.60 dB
    5.92171491e-5,  //  -84.55 dB
    5.95779420e-5,  //  -84.50 dB
    5.99409323e-5,  //  -84.45 dB
    6.03061380e-5,  //  -84.39 dB
    6.06735630e-5,  //  -84.34 dB
    6.10432326e-5,  //  -84.29 dB
    6.14151504e-5,  //  -84.23 dB
    6.17893384e-5,  //  -84.18 dB
    6.21658037e-5,  //  -84.13 dB
    6.25445609e-5,  //  -84.08 dB
    6.29256247e-5,  //  -84.02 dB
    6.33090167e-5,  //  -83.97 dB
    6.36947370e-5,  //  -83.92 dB
    6.40828148e-5,  //  -83.87 dB
    6.44732499e-5,  //  -83.81 dB
    6.48660716e-5,  //  -83.76 dB
    6.52612798e-5,  //  -83.71 dB
    6.56588963e-5,  //  -83.65 dB
    6.60589430e-5,  //  -83.60 dB
    6.64614199e-5,  //  -83.55 dB
    6.68663488e-5,  //  -83.50 dB
    6.72737515e-5,  //  -83.44 dB
    6.76836280e-5,  //  -83.39 dB
    6.80960075e-5,  //  -83.34 dB
    6.85108971e-5,  //  -83.28 dB
    6.89283115e-5,  //  -83.23 dB
    6.93482725e-5,  //  -83.18 dB
    6.97707947e-5,  //  -83.13 dB
    7.01958852e-5,  //  -83.07 dB
    7.06235733e-5,  //  -83.02 dB
    7.10538588e-5,  //  -82.97 dB
    7.14867710e-5,  //  -82.92 dB
    7.19223244e-5,  //  -82.86 dB
    7.23605262e-5,  //  -82.81 dB
    7.28013983e-5,  //  -82.76 dB
    7.32449553e-5,  //  -82.70 dB
    7.36912189e-5,  //  -82.65 dB
    7.41401964e-5,  //  -82.60 dB
    7.45919097e-5,  //  -82.55 dB
    7.50463805e-5,  //  -82.49 dB
    7.55036162e-5,  //  -82.44 dB
    7.59636387e-5,  //  -82.39 dB
    7.64264623e-5,  //  -82.34 dB
    7.68921091e-5,  //  -82.28 dB
    7.73605934e-5,  //  -82.23 dB
    7.78319300e-5,  //  -82.18 dB
    7.83061332e-5,  //  -82.12 dB
    7.87832323e-5,  //  -82.07 dB
    7.92632418e-5,  //  -82.02 dB
    7.97461689e-5,  //  -81.97 dB
    8.02320355e-5,  //  -81.91 dB
    8.07208708e-5,  //  -81.86 dB
    8.12126818e-5,  //  -81.81 dB
    8.17074833e-5,  //  -81.75 dB
    8.22053044e-5,  //  -81.70 dB
    8.27061594e-5,  //  -81.65 dB
    8.32100632e-5,  //  -81.60 dB
    8.37170446e-5,  //  -81.54 dB
    8.42271038e-5,  //  -81.49 dB
    8.47402771e-5,  //  -81.44 dB
    8.52565790e-5,  //  -81.39 dB
    8.57760242e-5,  //  -81.33 dB
    8.62986344e-5,  //  -81.28 dB
    8.68244242e-5,  //  -81.23 dB
    8.73534227e-5,  //  -81.17 dB
    8.78856445e-5,  //  -81.12 dB
    8.84211040e-5,  //  -81.07 dB
    8.89598305e-5,  //  -81.02 dB
    8.95018384e-5,  //  -80.96 dB
    9.00471496e-5,  //  -80.91 dB
    9.05957786e-5,  //  -80.86 dB
    9.11477546e-5,  //  -80.81 dB
    9.17030920e-5,  //  -80.75 dB
    9.22618128e-5,  //  -80.70 dB
    9.28239388e-5,  //  -80.65 dB
    9.33894917e-5,  //  -80.59 dB
    9.39584861e-5,  //  -80.54 dB
    9.45309439e-5,  //  -80.49 dB
    9.51069014e-5,  //  -80.44 dB
    9.56863587e-5,  //  -80.38 dB
    9.62693448e-5,  //  -80.33 dB
    9.68558888e-5,  //  -80.28 dB
    9.74460054e-5,  //  -80.22 dB
    9.80397162e-5,  //  -80.17 dB
    9.86370433e-5,  //  -80.12 dB
    9.92380155e-5,  //  -80.07 dB
    9.98426403e-5,  //  -80.01 dB
    1.00450954e-4,  //  -79.96 dB
    1.01062979e-4,  //  -79.91 dB
    1.01678728e-4,  //  -79.86 dB
    1.02298225e-4,  //  -79.80 dB
    1.02921498e-4,  //  -79.75 dB
    1.03548569e-4,  //  -79.70 dB
    1.04179468e-4,  //  -79.64 dB
    1.04814200e-4,  //  -79.59 dB
    1.05452804e-4,  //  -79.54 dB
    1.06095300e-4,  //  -79.49 dB
    1.06741711e-4,  //  -79.43 dB
    1.07392058e-4,  //  -79.38 dB
    1.08046363e-4,  //  -79.33 dB
    1.08704662e-4,  //  -79.28 dB
    1.09366971e-4,  //  -79.22 dB
    1.10033310e-4,  //  -79.17 dB
    1.10703717e-4,  //  -79.12 dB
    1.11378198e-4,  //  -79.06 dB
    1.12056798e-4,  //  -79.01 dB
    1.12739530e-4,  //  -78.96 dB
    1.13426417e-4,  //  -78.91 dB
    1.14117494e-4,  //  -78.85 dB
    1.14812778e-4,  //  -78.80 dB
    1.15512303e-4,  //  -78.75 dB
    1.16216084e-4,  //  -78.69 dB
    1.16924159e-4,  //  -78.64 dB
    1.17636540e-4,  //  -78.59 dB
    1.18353273e-4,  //  -78.54 dB
    1.19074364e-4,  //  -78.48 dB
    1.19799850e-4,  //  -78.43 dB
    1.20529759e-4,  //  -78.38 dB
    1.21264115e-4,  //  -78.33 dB
    1.22002937e-4,  //  -78.27 dB
    1.22746264e-4,  //  -78.22 dB
    1.23494130e-4,  //  -78.17 dB
    1.24246551e-4,  //  -78.11 dB
    1.25003542e-4,  //  -78.06 dB
    1.25765160e-4,  //  -78.01 dB
    1.26531406e-4,  //  -77.96 dB
    1.27302323e-4,  //  -77.90 dB
    1.28077940e-4,  //  -77.85 dB
    1.28858286e-4,  //  -77.80 dB
    1.29643391e-4,  //  -77.74 dB
    1.30433269e-4,  //  -77.69 dB
    1.31227964e-4,  //  -77.64 dB
    1.32027490e-4,  //  -77.59 dB
    1.32831905e-4,  //  -77.53 dB
    1.33641210e-4,  //  -77.48 dB
    1.34455448e-4,  //  -77.43 dB
    1.35274648e-4,  //  -77.38 dB
    1.36098839e-4,  //  -77.32 dB
    1.36928051e-4,  //  -77.27 dB
    1.37762312e-4,  //  -77.22 dB
    1.38601667e-4,  //  -77.16 dB
    1.39446129e-4,  //  -77.11 dB
    1.40295728e-4,  //  -77.06 dB
    1.41150507e-4,  //  -77.01 dB
    1.42010511e-4,  //  -76.95 dB
    1.42875739e-4,  //  -76.90 dB
    1.43746234e-4,  //  -76.85 dB
    1.44622041e-4,  //  -76.80 dB
    1.45503189e-4,  //  -76.74 dB
    1.46389692e-4,  //  -76.69 dB
    1.47281607e-4,  //  -76.64 dB
    1.48178951e-4,  //  -76.58 dB
    1.49081767e-4,  //  -76.53 dB
    1.49990083e-4,  //  -76.48 dB
    1.50903928e-4,  //  -76.43 dB
    1.51823348e-4,  //  -76.37 dB
    1.52748355e-4,  //  -76.32 dB
    1.53679008e-4,  //  -76.27 dB
    1.54615336e-4,  //  -76.21 dB
    1.55557369e-4,  //  -76.16 dB
    1.56505135e-4,  //  -76.11 dB
    1.57458679e-4,  //  -76.06 dB
    1.58418028e-4,  //  -76.00 dB
    1.59383228e-4,  //  -75.95 dB
    1.60354291e-4,  //  -75.90 dB
    1.61331292e-4,  //  -75.85 dB
    1.62314245e-4,  //  -75.79 dB
    1.63303179e-4,  //  -75.74 dB
    1.64298137e-4,  //  -75.69 dB
    1.65299163e-4,  //  -75.63 dB
    1.66306272e-4,  //  -75.58 dB
    1.67319537e-4,  //  -75.53 dB
    1.68338971e-4,  //  -75.48 dB
    1.69364605e-4,  //  -75.42 dB
    1.70396495e-4,  //  -75.37 dB
    1.71434687e-4,  //  -75.32 dB
    1.72479180e-4,  //  -75.27 dB
    1.73530047e-4,  //  -75.21 dB
    1.74587316e-4,  //  -75.16 dB
    1.75651032e-4,  //  -75.11 dB
    1.76721223e-4,  //  -75.05 dB
    1.77797934e-4,  //  -75.00 dB
    1.78881208e-4,  //  -74.95 dB
    1.79971088e-4,  //  -74.90 dB
    1.81067604e-4,  //  -74.84 dB
    1.82170799e-4,  //  -74.79 dB
    1.83280703e-4,  //  -74.74 dB
    1.84397388e-4,  //  -74.68 dB
    1.85520868e-4,  //  -74.63 dB
    1.86651203e-4,  //  -74.58 dB
    1.87788406e-4,  //  -74.53 dB
    1.88932550e-4,  //  -74.47 dB
    1.90083665e-4,  //  -74.42 dB
    1.91241794e-4,  //  -74.37 dB
    1.92406980e-4,  //  -74.32 dB
    1.93579253e-4,  //  -74.26 dB
    1.94758686e-4,  //  -74.21 dB
    1.95945293e-4,  //  -74.16 dB
    1.97139132e-4,  //  -74.10 dB
    1.98340247e-4,  //  -74.05 dB
    1.99548682e-4,  //  -74.00 dB
    2.00764465e-4,  //  -73.95 dB
    2.01987670e-4,  //  -73.89 dB
    2.03218326e-4,  //  -73.84 dB
    2.04456475e-4,  //  -73.79 dB
    2.05702177e-4,  //  -73.74 dB
    2.06955461e-4,  //  -73.68 dB
    2.08216385e-4,  //  -73.63 dB
    2.09484992e-4,  //  -73.58 dB
    2.10761325e-4,  //  -73.52 dB
    2.12045430e-4,  //  -73.47 dB
    2.13337364e-4,  //  -73.42 dB
    2.14637170e-4,  //  -73.37 dB
    2.15944892e-4,  //  -73.31 dB
    2.17260589e-4,  //  -73.26 dB
    2.18584290e-4,  //  -73.21 dB
    2.19916066e-4,  //  -73.15 dB
    2.21255948e-4,  //  -73.10 dB
    2.22604009e-4,  //  -73.05 dB
    2.23960276e-4,  //  -73.00 dB
    2.25324795e-4,  //  -72.94 dB
    2.26697637e-4,  //  -72.89 dB
    2.28078847e-4,  //  -72.84 dB
    2.29468467e-4,  //  -72.79 dB
    2.30866557e-4,  //  -72.73 dB
    2.32273160e-4,  //  -72.68 dB
    2.33688334e-4,  //  -72.63 dB
    2.35112137e-4,  //  -72.57 dB
    2.36544598e-4,  //  -72.52 dB
    2.37985805e-4,  //  -72.47 dB
    2.39435787e-4,  //  -72.42 dB
    2.40894602e-4,  //  -72.36 dB
    2.42362308e-4,  //  -72.31 dB
    2.43838949e-4,  //  -72.26 dB
    2.45324598e-4,  //  -72.21 dB
    2.46819283e-4,  //  -72.15 dB
    2.48323078e-4,  //  -72.10 dB
    2.49836041e-4,  //  -72.05 dB
    2.51358229e-4,  //  -71.99 dB
    2.52889673e-4,  //  -71.94 dB
    2.54430459e-4,  //  -71.89 dB
    2.55980645e-4,  //  -71.84 dB
    2.57540261e-4,  //  -71.78 dB
    2.59109394e-4,  //  -71.73 dB
    2.60688073e-4,  //  -71.68 dB
    2.62276357e-4,  //  -71.62 dB
    2.63874332e-4,  //  -71.57 dB
    2.65482056e-4,  //  -71.52 dB
    2.67099560e-4,  //  -71.47 dB
    2.68726930e-4,  //  -71.41 dB
    2.70364195e-4,  //  -71.36 dB
    2.72011472e-4,  //  -71.31 dB
    2.73668760e-4,  //  -71.26 dB
    2.75336148e-4,  //  -71.20 dB
    2.77013693e-4,  //  -71.15 dB
    2.78701453e-4,  //  -71.10 dB
    2.80399487e-4,  //  -71.04 dB
    2.82107882e-4,  //  -70.99 dB
    2.83826696e-4,  //  -70.94 dB
    2.85555987e-4,  //  -70.89 dB
    2.87295785e-4,  //  -70.83 dB
    2.89046206e-4,  //  -70.78 dB
    2.90807278e-4,  //  -70.73 dB
    2.92579090e-4,  //  -70.68 dB
    2.94361700e-4,  //  -70.62 dB
    2.96155165e-4,  //  -70.57 dB
    2.97959545e-4,  //  -70.52 dB
    2.99774925e-4,  //  -70.46 dB
    3.01601365e-4,  //  -70.41 dB
    3.03438952e-4,  //  -70.36 dB
    3.05287715e-4,  //  -70.31 dB
    3.07147740e-4,  //  -70.25 dB
    3.09019117e-4,  //  -70.20 dB
    3.10901873e-4,  //  -70.15 dB
    3.12796124e-4,  //  -70.09 dB
    3.14701902e-4,  //  -70.04 dB
    3.16619291e-4,  //  -69.99 dB
    3.18548351e-4,  //  -69.94 dB
    3.20489198e-4,  //  -69.88 dB
    3.22441832e-4,  //  -69.83 dB
    3.24406399e-4,  //  -69.78 dB
    3.26382898e-4,  //  -69.73 dB
    3.28371476e-4,  //  -69.67 dB
    3.30372131e-4,  //  -69.62 dB
    3.32385011e-4,  //  -69.57 dB
    3.34410142e-4,  //  -69.51 dB
    3.36447614e-4,  //  -69.46 dB
    3.38497484e-4,  //  -69.41 dB
    3.40559869e-4,  //  -69.36 dB
    3.42634798e-4,  //  -69.30 dB
    3.44722357e-4,  //  -69.25 dB
    3.46822664e-4,  //  -69.20 dB
    3.48935748e-4,  //  -69.15 dB
    3.51061724e-4,  //  -69.09 dB
    3.53200652e-4,  //  -69.04 dB
    3.55352589e-4,  //  -68.99 dB
    3.57517682e-4,  //  -68.93 dB
    3.59695929e-4,  //  -68.88 dB
    3.61887447e-4,  //  -68.83 dB
    3.64092324e-4,  //  -68.78 dB
    3.66310647e-4,  //  -68.72 dB
    3.68542474e-4,  //  -68.67 dB
    3.70787893e-4,  //  -68.62 dB
    3.73046991e-4,  //  -68.56 dB
    3.75319883e-4,  //  -68.51 dB
    3.77606601e-4,  //  -68.46 dB
    3.79907258e-4,  //  -68.41 dB
    3.82221915e-4,  //  -68.35 dB
    3.84550687e-4,  //  -68.30 dB
    3.86893633e-4,  //  -68.25 dB
    3.89250868e-4,  //  -68.20 dB
    3.91622481e-4,  //  -68.14 dB
    3.94008530e-4,  //  -68.09 dB
    3.96409101e-4,  //  -68.04 dB
    3.98824312e-4,  //  -67.98 dB
    4.01254249e-4,  //  -67.93 dB
    4.03698970e-4,  //  -67.88 dB
    4.06158593e-4,  //  -67.83 dB
    4.08633205e-4,  //  -67.77 dB
    4.11122892e-4,  //  -67.72 dB
    4.13627742e-4,  //  -67.67 dB
    4.16147872e-4,  //  -67.62 dB
    4.18683339e-4,  //  -67.56 dB
    4.21234261e-4,  //  -67.51 dB
    4.23800724e-4,  //  -67.46 dB
    4.26382816e-4,  //  -67.40 dB
    4.28980653e-4,  //  -67.35 dB
    4.31594322e-4,  //  -67.30 dB
    4.34223912e-4,  //  -67.25 dB
    4.36869508e-4,  //  -67.19 dB
    4.39531228e-4,  //  -67.14 dB
    4.42209188e-4,  //  -67.09 dB
    4.44903417e-4,  //  -67.03 dB
    4.47614089e-4,  //  -66.98 dB
    4.50341293e-4,  //  -66.93 dB
    4.53085086e-4,  //  -66.88 dB
    4.55845613e-4,  //  -66.82 dB
    4.58622962e-4,  //  -66.77 dB
    4.61417221e-4,  //  -66.72 dB
    4.64228506e-4,  //  -66.67 dB
    4.67056932e-4,  //  -66.61 dB
    4.69902559e-4,  //  -66.56 dB
    4.72765561e-4,  //  -66.51 dB
    4.75645968e-4,  //  -66.45 dB
    4.78543952e-4,  //  -66.40 dB
    4.81459603e-4,  //  -66.35 dB
    4.84392978e-4,  //  -66.30 dB
    4.87344252e-4,  //  -66.24 dB
    4.90313512e-4,  //  -66.19 dB
    4.93300846e-4,  //  -66.14 dB
    4.96306398e-4,  //  -66.09 dB
    4.99330286e-4,  //  -66.03 dB
    5.02372510e-4,  //  -65.98 dB
    5.05433360e-4,  //  -65.93 dB
    5.08512836e-4,  //  -65.87 dB
    5.11611055e-4,  //  -65.82 dB
    5.14728134e-4,  //  -65.77 dB
    5.17864246e-4,  //  -65.72 dB
    5.21019450e-4,  //  -65.66 dB
    5.24193863e-4,  //  -65.61 dB
    5.27387660e-4,  //  -65.56 dB
    5.30600839e-4,  //  -65.50 dB
    5.33833692e-4,  //  -65.45 dB
    5.37086162e-4,  //  -65.40 dB
    5.40358480e-4,  //  -65.35 dB
    5.43650764e-4,  //  -65.29 dB
    5.46963071e-4,  //  -65.24 dB
    5.50295517e-4,  //  -65.19 dB
    5.53648337e-4,  //  -65.14 dB
    5.57021587e-4,  //  -65.08 dB
    5.60415327e-4,  //  -65.03 dB
    5.63829788e-4,  //  -64.98 dB
    5.67265030e-4,  //  -64.92 dB
    5.70721226e-4,  //  -64.87 dB
    5.74198493e-4,  //  -64.82 dB
    5.77696890e-4,  //  -64.77 dB
    5.81216649e-4,  //  -64.71 dB
    5.84757829e-4,  //  -64.66 dB
    5.88320603e-4,  //  -64.61 dB
    5.91905089e-4,  //  -64.55 dB
    5.95511403e-4,  //  -64.50 dB
    5.99139661e-4,  //  -64.45 dB
    6.02790096e-4,  //  -64.40 dB
    6.06462709e-4,  //  -64.34 dB
    6.10157731e-4,  //  -64.29 dB
    6.13875221e-4,  //  -64.24 dB
    6.17615413e-4,  //  -64.19 dB
    6.21378364e-4,  //  -64.13 dB
    6.25164248e-4,  //  -64.08 dB
    6.28973183e-4,  //  -64.03 dB
    6.32805342e-4,  //  -63.97 dB
    6.36660843e-4,  //  -63.92 dB
    6.40539860e-4,  //  -63.87 dB
    6.44442509e-4,  //  -63.82 dB
    6.48368907e-4,  //  -63.76 dB
    6.52319228e-4,  //  -63.71 dB
    6.56293647e-4,  //  -63.66 dB
    6.60292222e-4,  //  -63.61 dB
    6.64315245e-4,  //  -63.55 dB
    6.68362714e-4,  //  -63.50 dB
    6.72434864e-4,  //  -63.45 dB
    6.76531810e-4,  //  -63.39 dB
    6.80653728e-4,  //  -63.34 dB
    6.84800791e-4,  //  -63.29 dB
    6.88973058e-4,  //  -63.24 dB
    6.93170819e-4,  //  -63.18 dB
    6.97394076e-4,  //  -63.13 dB
    7.01643119e-4,  //  -63.08 dB
    7.05918006e-4,  //  -63.02 dB
    7.10218970e-4,  //  -62.97 dB
    7.14546186e-4,  //  -62.92 dB
    7.18899712e-4,  //  -62.87 dB
    7.23279722e-4,  //  -62.81 dB
    7.27686507e-4,  //  -62.76 dB
    7.32120068e-4,  //  -62.71 dB
    7.36580696e-4,  //  -62.66 dB
    7.41068448e-4,  //  -62.60 dB
    7.45583558e-4,  //  -62.55 dB
    7.50126201e-4,  //  -62.50 dB
    7.54696550e-4,  //  -62.44 dB
    7.59294664e-4,  //  -62.39 dB
    7.63920834e-4,  //  -62.34 dB
    7.68575235e-4,  //  -62.29 dB
    7.73257925e-4,  //  -62.23 dB
    7.77969137e-4,  //  -62.18 dB
    7.82709103e-4,  //  -62.13 dB
    7.87477940e-4,  //  -62.08 dB
    7.92275823e-4,  //  -62.02 dB
    7.97102926e-4,  //  -61.97 dB
    8.01959482e-4,  //  -61.92 dB
    8.06845608e-4,  //  -61.86 dB
    8.11761478e-4,  //  -61.81 dB
    8.16707325e-4,  //  -61.76 dB
    8.21683265e-4,  //  -61.71 dB
    8.26689531e-4,  //  -61.65 dB
    8.31726356e-4,  //  -61.60 dB
    8.36793799e-4,  //  -61.55 dB
    8.41892150e-4,  //  -61.49 dB
    8.47021583e-4,  //  -61.44 dB
    8.52182275e-4,  //  -61.39 dB
    8.57374340e-4,  //  -61.34 dB
    8.62598128e-4,  //  -61.28 dB
    8.67853698e-4,  //  -61.23 dB
    8.73141282e-4,  //  -61.18 dB
    8.78461055e-4,  //  -61.13 dB
    8.83813307e-4,  //  -61.07 dB
    8.89198098e-4,  //  -61.02 dB
    8.94615776e-4,  //  -60.97 dB
    9.00066399e-4,  //  -60.91 dB
    9.05550260e-4,  //  -60.86 dB
    9.11067531e-4,  //  -60.81 dB
    9.16618388e-4,  //  -60.76 dB
    9.22203122e-4,  //  -60.70 dB
    9.27821849e-4,  //  -60.65 dB
    9.33474803e-4,  //  -60.60 dB
    9.39162157e-4,  //  -60.55 dB
    9.44884261e-4,  //  -60.49 dB
    9.50641173e-4,  //  -60.44 dB
    9.56433127e-4,  //  -60.39 dB
    9.62260412e-4,  //  -60.33 dB
    9.68123204e-4,  //  -60.28 dB
    9.74021736e-4,  //  -60.23 dB
    9.79956123e-4,  //  -60.18 dB
    9.85926716e-4,  //  -60.12 dB
    9.91933746e-4,  //  -60.07 dB
    9.97977331e-4,  //  -60.02 dB
    1.00405770e-3,  //  -59.96 dB
    1.01017510e-3,  //  -59.91 dB
    1.01632986e-3,  //  -59.86 dB
    1.02252210e-3,  //  -59.81 dB
    1.02875207e-3,  //  -59.75 dB
    1.03501987e-3,  //  -59.70 dB
    1.04132597e-3,  //  -59.65 dB
    1.04767049e-3,  //  -59.60 dB
    1.05405366e-3,  //  -59.54 dB
    1.06047571e-3,  //  -59.49 dB
    1.06693688e-3,  //  -59.44 dB
    1.07343751e-3,  //  -59.38 dB
    1.07997761e-3,  //  -59.33 dB
    1.08655763e-3,  //  -59.28 dB
    1.09317771e-3,  //  -59.23 dB
    1.09983818e-3,  //  -59.17 dB
    1.10653916e-3,  //  -59.12 dB
    1.11328100e-3,  //  -59.07 dB
    1.12006394e-3,  //  -59.02 dB
    1.12688809e-3,  //  -58.96 dB
    1.13375392e-3,  //  -58.91 dB
    1.14066154e-3,  //  -58.86 dB
    1.14761130e-3,  //  -58.80 dB
    1.15460344e-3,  //  -58.75 dB
    1.16163807e-3,  //  -58.70 dB
    1.16871565e-3,  //  -58.65 dB
    1.17583631e-3,  //  -58.59 dB
    1.18300028e-3,  //  -58.54 dB
    1.19020802e-3,  //  -58.49 dB
    1.19745964e-3,  //  -58.43 dB
    1.20475539e-3,  //  -58.38 dB
    1.21209561e-3,  //  -58.33 dB
    1.21948053e-3,  //  -58.28 dB
    1.22691051e-3,  //  -58.22 dB
    1.23438577e-3,  //  -58.17 dB
    1.24190655e-3,  //  -58.12 dB
    1.24947308e-3,  //  -58.07 dB
    1.25708582e-3,  //  -58.01 dB
    1.26474490e-3,  //  -57.96 dB
    1.27245067e-3,  //  -57.91 dB
    1.28020335e-3,  //  -57.85 dB
    1.28800317e-3,  //  -57.80 dB
    1.29585073e-3,  //  -57.75 dB
    1.30374590e-3,  //  -57.70 dB
    1.31168927e-3,  //  -57.64 dB
    1.31968106e-3,  //  -57.59 dB
    1.32772152e-3,  //  -57.54 dB
    1.33581099e-3,  //  -57.49 dB
    1.34394970e-3,  //  -57.43 dB
    1.35213800e-3,  //  -57.38 dB
    1.36037613e-3,  //  -57.33 dB
    1.36866455e-3,  //  -57.27 dB
    1.37700350e-3,  //  -57.22 dB
    1.38539309e-3,  //  -57.17 dB
    1.39383401e-3,  //  -57.12 dB
    1.40232616e-3,  //  -57.06 dB
    1.41087023e-3,  //  -57.01 dB
    1.41946622e-3,  //  -56.96 dB
    1.42811460e-3,  //  -56.90 dB
    1.43681571e-3,  //  -56.85 dB
    1.44556980e-3,  //  -56.80 dB
    1.45437731e-3,  //  -56.75 dB
    1.46323838e-3,  //  -56.69 dB
    1.47215347e-3,  //  -56.64 dB
    1.48112292e-3,  //  -56.59 dB
    1.49014697e-3,  //  -56.54 dB
    1.49922608e-3,  //  -56.48 dB
    1.50836038e-3,  //  -56.43 dB
    1.51755044e-3,  //  -56.38 dB
    1.52679649e-3,  //  -56.32 dB
    1.53609877e-3,  //  -56.27 dB
    1.54545787e-3,  //  -56.22 dB
    1.55487389e-3,  //  -56.17 dB
    1.56434730e-3,  //  -56.11 dB
    1.57387846e-3,  //  -56.06 dB
    1.58346759e-3,  //  -56.01 dB
    1.59311527e-3,  //  -55.96 dB
    1.60282163e-3,  //  -55.90 dB
    1.61258713e-3,  //  -55.85 dB
    1.62241224e-3,  //  -55.80 dB
    1.63229718e-3,  //  -55.74 dB
    1.64224231e-3,  //  -55.69 dB
    1.65224797e-3,  //  -55.64 dB
    1.66231464e-3,  //  -55.59 dB
    1.67244265e-3,  //  -55.53 dB
    1.68263237e-3,  //  -55.48 dB
    1.69288425e-3,  //  -55.43 dB
    1.70319853e-3,  //  -55.37 dB
    1.71357556e-3,  //  -55.32 dB
    1.72401592e-3,  //  -55.27 dB
    1.73451984e-3,  //  -55.22 dB
    1.74508779e-3,  //  -55.16 dB
    1.75572012e-3,  //  -55.11 dB
    1.76641729e-3,  //  -55.06 dB
    1.77717954e-3,  //  -55.01 dB
    1.78800744e-3,  //  -54.95 dB
    1.79890124e-3,  //  -54.90 dB
    1.80986151e-3,  //  -54.85 dB
    1.82088849e-3,  //  -54.79 dB
    1.83198263e-3,  //  -54.74 dB
    1.84314442e-3,  //  -54.69 dB
    1.85437419e-3,  //  -54.64 dB
    1.86567230e-3,  //  -54.58 dB
    1.87703932e-3,  //  -54.53 dB
    1.88847561e-3,  //  -54.48 dB
    1.89998152e-3,  //  -54.43 dB
    1.91155763e-3,  //  -54.37 dB
    1.92320417e-3,  //  -54.32 dB
    1.93492172e-3,  //  -54.27 dB
    1.94671075e-3,  //  -54.21 dB
    1.95857137e-3,  //  -54.16 dB
    1.97050441e-3,  //  -54.11 dB
    1.98251032e-3,  //  -54.06 dB
    1.99458911e-3,  //  -54.00 dB
    2.00674147e-3,  //  -53.95 dB
    2.01896811e-3,  //  -53.90 dB
    2.03126902e-3,  //  -53.84 dB
    2.04364513e-3,  //  -53.79 dB
    2.05609645e-3,  //  -53.74 dB
    2.06862367e-3,  //  -53.69 dB
    2.08122726e-3,  //  -53.63 dB
    2.09390745e-3,  //  -53.58 dB
    2.10666517e-3,  //  -53.53 dB
    2.11950042e-3,  //  -53.48 dB
    2.13241391e-3,  //  -53.42 dB
    2.14540609e-3,  //  -53.37 dB
    2.15847744e-3,  //  -53.32 dB
    2.17162864e-3,  //  -53.26 dB
    2.18485971e-3,  //  -53.21 dB
    2.19817134e-3,  //  -53.16 dB
    2.21156422e-3,  //  -53.11 dB
    2.22503860e-3,  //  -53.05 dB
    2.23859516e-3,  //  -53.00 dB
    2.25223438e-3,  //  -52.95 dB
    2.26595649e-3,  //  -52.89 dB
    2.27976241e-3,  //  -52.84 dB
    2.29365239e-3,  //  -52.79 dB
    2.30762688e-3,  //  -52.74 dB
    2.32168660e-3,  //  -52.68 dB
    2.33583199e-3,  //  -52.63 dB
    2.35006376e-3,  //  -52.58 dB
    2.36438191e-3,  //  -52.53 dB
    2.37878738e-3,  //  -52.47 dB
    2.39328085e-3,  //  -52.42 dB
    2.40786234e-3,  //  -52.37 dB
    2.42253277e-3,  //  -52.31 dB
    2.43729260e-3,  //  -52.26 dB
    2.45214230e-3,  //  -52.21 dB
    2.46708258e-3,  //  -52.16 dB
    2.48211389e-3,  //  -52.10 dB
    2.49723671e-3,  //  -52.05 dB
    2.51245149e-3,  //  -52.00 dB
    2.52775918e-3,  //  -51.95 dB
    2.54316023e-3,  //  -51.89 dB
    2.55865487e-3,  //  -51.84 dB
    2.57424405e-3,  //  -51.79 dB
    2.58992822e-3,  //  -51.73 dB
    2.60570808e-3,  //  -51.68 dB
    2.62158387e-3,  //  -51.63 dB
    2.63755652e-3,  //  -51.58 dB
    2.65362626e-3,  //  -51.52 dB
    2.66979402e-3,  //  -51.47 dB
    2.68606050e-3,  //  -51.42 dB
    2.70242593e-3,  //  -51.36 dB
    2.71889102e-3,  //  -51.31 dB
    2.73545645e-3,  //  -51.26 dB
    2.75212270e-3,  //  -51.21 dB
    2.76889070e-3,  //  -51.15 dB
    2.78576068e-3,  //  -51.10 dB
    2.80273356e-3,  //  -51.05 dB
    2.81980983e-3,  //  -51.00 dB
    2.83699017e-3,  //  -50.94 dB
    2.85427528e-3,  //  -50.89 dB
    2.87166564e-3,  //  -50.84 dB
    2.88916170e-3,  //  -50.78 dB
    2.90676462e-3,  //  -50.73 dB
    2.92447465e-3,  //  -50.68 dB
    2.94229272e-3,  //  -50.63 dB
    2.96021928e-3,  //  -50.57 dB
    2.97825504e-3,  //  -50.52 dB
    2.99640070e-3,  //  -50.47 dB
    3.01465695e-3,  //  -50.42 dB
    3.03302449e-3,  //  -50.36 dB
    3.05150379e-3,  //  -50.31 dB
    3.07009579e-3,  //  -50.26 dB
    3.08880117e-3,  //  -50.20 dB
    3.10762017e-3,  //  -50.15 dB
    3.12655419e-3,  //  -50.10 dB
    3.14560323e-3,  //  -50.05 dB
    3.16476868e-3,  //  -49.99 dB
    3.18405079e-3,  //  -49.94 dB
    3.20345024e-3,  //  -49.89 dB
    3.22296796e-3,  //  -49.83 dB
    3.24260467e-3,  //  -49.78 dB
    3.26236081e-3,  //  -49.73 dB
    3.28223757e-3,  //  -49.68 dB
    3.30223516e-3,  //  -49.62 dB
    3.32235498e-3,  //  -49.57 dB
    3.34259705e-3,  //  -49.52 dB
    3.36296251e-3,  //  -49.47 dB
    3.38345207e-3,  //  -49.41 dB
    3.40406667e-3,  //  -49.36 dB
    3.42480652e-3,  //  -49.31 dB
    3.44567304e-3,  //  -49.25 dB
    3.46666644e-3,  //  -49.20 dB
    3.48778791e-3,  //  -49.15 dB
    3.50903813e-3,  //  -49.10 dB
    3.53041757e-3,  //  -49.04 dB
    3.55192740e-3,  //  -48.99 dB
    3.57356831e-3,  //  -48.94 dB
    3.59534123e-3,  //  -48.89 dB
    3.61724664e-3,  //  -48.83 dB
    3.63928545e-3,  //  -48.78 dB
    3.66145861e-3,  //  -48.73 dB
    3.68376682e-3,  //  -48.67 dB
    3.70621099e-3,  //  -48.62 dB
    3.72879184e-3,  //  -48.57 dB
    3.75151052e-3,  //  -48.52 dB
    3.77436727e-3,  //  -48.46 dB
    3.79736349e-3,  //  -48.41 dB
    3.82049964e-3,  //  -48.36 dB
    3.84377688e-3,  //  -48.30 dB
    3.86719615e-3,  //  -48.25 dB
    3.89075768e-3,  //  -48.20 dB
    3.91446287e-3,  //  -48.15 dB
    3.93831264e-3,  //  -48.09 dB
    3.96230770e-3,  //  -48.04 dB
    3.98644898e-3,  //  -47.99 dB
    4.01073741e-3,  //  -47.94 dB
    4.03517392e-3,  //  -47.88 dB
    4.05975897e-3,  //  -47.83 dB
    4.08449396e-3,  //  -47.78 dB
    4.10937937e-3,  //  -47.72 dB
    4.13441705e-3,  //  -47.67 dB
    4.15960653e-3,  //  -47.62 dB
    4.18495014e-3,  //  -47.57 dB
    4.21044789e-3,  //  -47.51 dB
    4.23610071e-3,  //  -47.46 dB
    4.26191045e-3,  //  -47.41 dB
    4.28787665e-3,  //  -47.36 dB
    4.31400165e-3,  //  -47.30 dB
    4.34028590e-3,  //  -47.25 dB
    4.36672987e-3,  //  -47.20 dB
    4.39333497e-3,  //  -47.14 dB
    4.42010257e-3,  //  -47.09 dB
    4.44703316e-3,  //  -47.04 dB
    4.47412767e-3,  //  -46.99 dB
    4.50138701e-3,  //  -46.93 dB
    4.52881260e-3,  //  -46.88 dB
    4.55640536e-3,  //  -46.83 dB
    4.58416669e-3,  //  -46.77 dB
    4.61209659e-3,  //  -46.72 dB
    4.64019692e-3,  //  -46.67 dB
    4.66846814e-3,  //  -46.62 dB
    4.69691167e-3,  //  -46.56 dB
    4.72552888e-3,  //  -46.51 dB
    4.75432025e-3,  //  -46.46 dB
    4.78328671e-3,  //  -46.41 dB
    4.81243012e-3,  //  -46.35 dB
    4.84175095e-3,  //  -46.30 dB
    4.87125013e-3,  //  -46.25 dB
    4.90092952e-3,  //  -46.19 dB
    4.93078958e-3,  //  -46.14 dB
    4.96083125e-3,  //  -46.09 dB
    4.99105640e-3,  //  -46.04 dB
    5.02146548e-3,  //  -45.98 dB
    5.05205989e-3,  //  -45.93 dB
    5.08284057e-3,  //  -45.88 dB
    5.11380890e-3,  //  -45.83 dB
    5.14496583e-3,  //  -45.77 dB
    5.17631276e-3,  //  -45.72 dB
    5.20785060e-3,  //  -45.67 dB
    5.23958076e-3,  //  -45.61 dB
    5.27150417e-3,  //  -45.56 dB
    5.30362176e-3,  //  -45.51 dB
    5.33593539e-3,  //  -45.46 dB
    5.36844553e-3,  //  -45.40 dB
    5.40115405e-3,  //  -45.35 dB
    5.43406187e-3,  //  -45.30 dB
    5.46716992e-3,  //  -45.24 dB
    5.50048007e-3,  //  -45.19 dB
    5.53399278e-3,  //  -45.14 dB
    5.56770992e-3,  //  -45.09 dB
    5.60163241e-3,  //  -45.03 dB
    5.63576166e-3,  //  -44.98 dB
    5.67009859e-3,  //  -44.93 dB
    5.70464507e-3,  //  -44.88 dB
    5.73940203e-3,  //  -44.82 dB
    5.77437039e-3,  //  -44.77 dB
    5.80955204e-3,  //  -44.72 dB
    5.84494788e-3,  //  -44.66 dB
    5.88055979e-3,  //  -44.61 dB
    5.91638824e-3,  //  -44.56 dB
    5.95243508e-3,  //  -44.51 dB
    5.98870171e-3,  //  -44.45 dB
    6.02518907e-3,  //  -44.40 dB
    6.06189901e-3,  //  -44.35 dB
    6.09883247e-3,  //  -44.30 dB
    6.13599084e-3,  //  -44.24 dB
    6.17337599e-3,  //  -44.19 dB
    6.21098839e-3,  //  -44.14 dB
    6.24883035e-3,  //  -44.08 dB
    6.28690282e-3,  //  -44.03 dB
    6.32520719e-3,  //  -43.98 dB
    6.36374485e-3,  //  -43.93 dB
    6.40251720e-3,  //  -43.87 dB
    6.44152611e-3,  //  -43.82 dB
    6.48077251e-3,  //  -43.77 dB
    6.52025780e-3,  //  -43.71 dB
    6.55998429e-3,  //  -43.66 dB
    6.59995200e-3,  //  -43.61 dB
    6.64016372e-3,  //  -43.56 dB
    6.68062037e-3,  //  -43.50 dB
    6.72132382e-3,  //  -43.45 dB
    6.76227501e-3,  //  -43.40 dB
    6.80347532e-3,  //  -43.35 dB
    6.84492709e-3,  //  -43.29 dB
    6.88663125e-3,  //  -43.24 dB
    6.92858966e-3,  //  -43.19 dB
    6.97080372e-3,  //  -43.13 dB
    7.01327482e-3,  //  -43.08 dB
    7.05600483e-3,  //  -43.03 dB
    7.09899515e-3,  //  -42.98 dB
    7.14224717e-3,  //  -42.92 dB
    7.18576275e-3,  //  -42.87 dB
    7.22954376e-3,  //  -42.82 dB
    7.27359159e-3,  //  -42.77 dB
    7.31790718e-3,  //  -42.71 dB
    7.36249331e-3,  //  -42.66 dB
    7.40735093e-3,  //  -42.61 dB
    7.45248189e-3,  //  -42.55 dB
    7.49788759e-3,  //  -42.50 dB
    7.54357036e-3,  //  -42.45 dB
    7.58953113e-3,  //  -42.40 dB
    7.63577223e-3,  //  -42.34 dB
    7.68229458e-3,  //  -42.29 dB
    7.72910099e-3,  //  -42.24 dB
    7.77619192e-3,  //  -42.18 dB
    7.82357063e-3,  //  -42.13 dB
    7.87123665e-3,  //  -42.08 dB
    7.91919418e-3,  //  -42.03 dB
    7.96744414e-3,  //  -41.97 dB
    8.01598746e-3,  //  -41.92 dB
    8.06482602e-3,  //  -41.87 dB
    8.11396260e-3,  //  -41.82 dB
    8.16339906e-3,  //  -41.76 dB
    8.21313635e-3,  //  -41.71 dB
    8.26317724e-3,  //  -41.66 dB
    8.31352174e-3,  //  -41.60 dB
    8.36417358e-3,  //  -41.55 dB
    8.41513462e-3,  //  -41.50 dB
    8.46640579e-3,  //  -41.45 dB
    8.51798896e-3,  //  -41.39 dB
    8.56988691e-3,  //  -41.34 dB
    8.62210058e-3,  //  -41.29 dB
    8.67463276e-3,  //  -41.23 dB
    8.72748531e-3,  //  -41.18 dB
    8.78065918e-3,  //  -41.13 dB
    8.83415714e-3,  //  -41.08 dB
    8.88798106e-3,  //  -41.02 dB
    8.94213282e-3,  //  -40.97 dB
    8.99661519e-3,  //  -40.92 dB
    9.05142911e-3,  //  -40.87 dB
    9.10657644e-3,  //  -40.81 dB
    9.16206092e-3,  //  -40.76 dB
    9.21788253e-3,  //  -40.71 dB
    9.27404407e-3,  //  -40.65 dB
    9.33054835e-3,  //  -40.60 dB
    9.38739721e-3,  //  -40.55 dB
    9.44459159e-3,  //  -40.50 dB
    9.50213522e-3,  //  -40.44 dB
    9.56002902e-3,  //  -40.39 dB
    9.61827580e-3,  //  -40.34 dB
    9.67687741e-3,  //  -40.29 dB
    9.73583572e-3,  //  -40.23 dB
    9.79515351e-3,  //  -40.18 dB
    9.85483266e-3,  //  -40.13 dB
    9.91487503e-3,  //  -40.07 dB
    9.97528341e-3,  //  -40.02 dB
    1.00360606e-2,  //  -39.97 dB
    1.00972075e-2,  //  -39.92 dB
    1.01587269e-2,  //  -39.86 dB
    1.02206208e-2,  //  -39.81 dB
    1.02828927e-2,  //  -39.76 dB
    1.03455428e-2,  //  -39.70 dB
    1.04085756e-2,  //  -39.65 dB
    1.04719922e-2,  //  -39.60 dB
    1.05357952e-2,  //  -39.55 dB
    1.05999867e-2,  //  -39.49 dB
    1.06645692e-2,  //  -39.44 dB
    1.07295457e-2,  //  -39.39 dB
    1.07949181e-2,  //  -39.34 dB
    1.08606881e-2,  //  -39.28 dB
    1.09268595e-2,  //  -39.23 dB
    1.09934341e-2,  //  -39.18 dB
    1.10604139e-2,  //  -39.12 dB
    1.11278016e-2,  //  -39.07 dB
    1.11956000e-2,  //  -39.02 dB
    1.12638120e-2,  //  -38.97 dB
    1.13324393e-2,  //  -38.91 dB
    1.14014847e-2,  //  -38.86 dB
    1.14709511e-2,  //  -38.81 dB
    1.15408404e-2,  //  -38.76 dB
    1.16111552e-2,  //  -38.70 dB
    1.16818985e-2,  //  -38.65 dB
    1.17530730e-2,  //  -38.60 dB
    1.18246814e-2,  //  -38.54 dB
    1.18967257e-2,  //  -38.49 dB
    1.19692096e-2,  //  -38.44 dB
    1.20421341e-2,  //  -38.39 dB
    1.21155037e-2,  //  -38.33 dB
    1.21893203e-2,  //  -38.28 dB
    1.22635858e-2,  //  -38.23 dB
    1.23383049e-2,  //  -38.17 dB
    1.24134785e-2,  //  -38.12 dB
    1.24891102e-2,  //  -38.07 dB
    1.25652030e-2,  //  -38.02 dB
    1.26417596e-2,  //  -37.96 dB
    1.27187818e-2,  //  -37.91 dB
    1.27962744e-2,  //  -37.86 dB
    1.28742382e-2,  //  -37.81 dB
    1.29526779e-2,  //  -37.75 dB
    1.30315945e-2,  //  -37.70 dB
    1.31109925e-2,  //  -37.65 dB
    1.31908739e-2,  //  -37.59 dB
    1.32712424e-2,  //  -37.54 dB
    1.33520998e-2,  //  -37.49 dB
    1.34334508e-2,  //  -37.44 dB
    1.35152973e-2,  //  -37.38 dB
    1.35976421e-2,  //  -37.33 dB
    1.36804888e-2,  //  -37.28 dB
    1.37638403e-2,  //  -37.23 dB
    1.38476994e-2,  //  -37.17 dB
    1.39320698e-2,  //  -37.12 dB
    1.40169533e-2,  //  -37.07 dB
    1.41023546e-2,  //  -37.01 dB
    1.41882766e-2,  //  -36.96 dB
    1.42747220e-2,  //  -36.91 dB
    1.43616935e-2,  //  -36.86 dB
    1.44491959e-2,  //  -36.80 dB
    1.45372311e-2,  //  -36.75 dB
    1.46258017e-2,  //  -36.70 dB
    1.47149125e-2,  //  -36.64 dB
    1.48045663e-2,  //  -36.59 dB
    1.48947667e-2,  //  -36.54 dB
    1.49855167e-2,  //  -36.49 dB
    1.50768189e-2,  //  -36.43 dB
    1.51686780e-2,  //  -36.38 dB
    1.52610959e-2,  //  -36.33 dB
    1.53540783e-2,  //  -36.28 dB
    1.54476259e-2,  //  -36.22 dB
    1.55417444e-2,  //  -36.17 dB
    1.56364348e-2,  //  -36.12 dB
    1.57317035e-2,  //  -36.06 dB
    1.58275533e-2,  //  -36.01 dB
    1.59239862e-2,  //  -35.96 dB
    1.60210058e-2,  //  -35.91 dB
    1.61186177e-2,  //  -35.85 dB
    1.62168238e-2,  //  -35.80 dB
    1.63156278e-2,  //  -35.75 dB
    1.64150354e-2,  //  -35.70 dB
    1.65150482e-2,  //  -35.64 dB
    1.66156683e-2,  //  -35.59 dB
    1.67169031e-2,  //  -35.54 dB
    1.68187544e-2,  //  -35.48 dB
    1.69212278e-2,  //  -35.43 dB
    1.70243233e-2,  //  -35.38 dB
    1.71280485e-2,  //  -35.33 dB
    1.72324050e-2,  //  -35.27 dB
    1.73373967e-2,  //  -35.22 dB
    1.74430292e-2,  //  -35.17 dB
    1.75493043e-2,  //  -35.11 dB
    1.76562276e-2,  //  -35.06 dB
    1.77638009e-2,  //  -35.01 dB
    1.78720318e-2,  //  -34.96 dB
    1.79809202e-2,  //  -34.90 dB
    1.80904735e-2,  //  -34.85 dB
    1.82006937e-2,  //  -34.80 dB
    1.83115844e-2,  //  -34.75 dB
    1.84231531e-2,  //  -34.69 dB
    1.85353998e-2,  //  -34.64 dB
    1.86483301e-2,  //  -34.59 dB
    1.87619496e-2,  //  -34.53 dB
    1.88762601e-2,  //  -34.48 dB
    1.89912692e-2,  //  -34.43 dB
    1.91069767e-2,  //  -34.38 dB
    1.92233901e-2,  //  -34.32 dB
    1.93405133e-2,  //  -34.27 dB
    1.94583498e-2,  //  -34.22 dB
    1.95769034e-2,  //  -34.17 dB
    1.96961816e-2,  //  -34.11 dB
    1.98161844e-2,  //  -34.06 dB
    1.99369192e-2,  //  -34.01 dB
    2.00583879e-2,  //  -33.95 dB
    2.01805998e-2,  //  -33.90 dB
    2.03035530e-2,  //  -33.85 dB
    2.04272568e-2,  //  -33.80 dB
    2.05517150e-2,  //  -33.74 dB
    2.06769314e-2,  //  -33.69 dB
    2.08029095e-2,  //  -33.64 dB
    2.09296569e-2,  //  -33.58 dB
    2.10571755e-2,  //  -33.53 dB
    2.11854707e-2,  //  -33.48 dB
    2.13145465e-2,  //  -33.43 dB
    2.14444101e-2,  //  -33.37 dB
    2.15750653e-2,  //  -33.32 dB
    2.17065159e-2,  //  -33.27 dB
    2.18387675e-2,  //  -33.22 dB
    2.19718255e-2,  //  -33.16 dB
    2.21056938e-2,  //  -33.11 dB
    2.22403780e-2,  //  -33.06 dB
    2.23758817e-2,  //  -33.00 dB
    2.25122124e-2,  //  -32.95 dB
    2.26493720e-2,  //  -32.90 dB
    2.27873698e-2,  //  -32.85 dB
    2.29262058e-2,  //  -32.79 dB
    2.30658893e-2,  //  -32.74 dB
    2.32064240e-2,  //  -32.69 dB
    2.33478136e-2,  //  -32.64 dB
    2.34900657e-2,  //  -32.58 dB
    2.36331839e-2,  //  -32.53 dB
    2.37771738e-2,  //  -32.48 dB
    2.39220411e-2,  //  -32.42 dB
    2.40677912e-2,  //  -32.37 dB
    2.42144298e-2,  //  -32.32 dB
    2.43619625e-2,  //  -32.27 dB
    2.45103929e-2,  //  -32.21 dB
    2.46597268e-2,  //  -32.16 dB
    2.48099733e-2,  //  -32.11 dB
    2.49611326e-2,  //  -32.05 dB
    2.51132138e-2,  //  -32.00 dB
    2.52662208e-2,  //  -31.95 dB
    2.54201610e-2,  //  -31.90 dB
    2.55750399e-2,  //  -31.84 dB
    2.57308614e-2,  //  -31.79 dB
    2.58876327e-2,  //  -31.74 dB
    2.60453578e-2,  //  -31.69 dB
    2.62040459e-2,  //  -31.63 dB
    2.63636988e-2,  //  -31.58 dB
    2.65243258e-2,  //  -31.53 dB
    2.66859308e-2,  //  -31.47 dB
    2.68485211e-2,  //  -31.42 dB
    2.70121023e-2,  //  -31.37 dB
    2.71766782e-2,  //  -31.32 dB
    2.73422580e-2,  //  -31.26 dB
    2.75088474e-2,  //  -31.21 dB
    2.76764520e-2,  //  -31.16 dB
    2.78450772e-2,  //  -31.11 dB
    2.80147288e-2,  //  -31.05 dB
    2.81854142e-2,  //  -31.00 dB
    2.83571407e-2,  //  -30.95 dB
    2.85299122e-2,  //  -30.89 dB
    2.87037380e-2,  //  -30.84 dB
    2.88786218e-2,  //  -30.79 dB
    2.90545709e-2,  //  -30.74 dB
    2.92315912e-2,  //  -30.68 dB
    2.94096917e-2,  //  -30.63 dB
    2.95888763e-2,  //  -30.58 dB
    2.97691543e-2,  //  -30.52 dB
    2.99505293e-2,  //  -30.47 dB
    3.01330090e-2,  //  -30.42 dB
    3.03166006e-2,  //  -30.37 dB
    3.05013116e-2,  //  -30.31 dB
    3.06871478e-2,  //  -30.26 dB
    3.08741163e-2,  //  -30.21 dB
    3.10622230e-2,  //  -30.16 dB
    3.12514752e-2,  //  -30.10 dB
    3.14418823e-2,  //  -30.05 dB
    3.16334516e-2,  //  -30.00 dB
    3.18261832e-2,  //  -29.94 dB
    3.20200920e-2,  //  -29.89 dB
    3.22151817e-2,  //  -29.84 dB
    3.24114598e-2,  //  -29.79 dB
    3.26089337e-2,  //  -29.73 dB
    3.28076109e-2,  //  -29.68 dB
    3.30074988e-2,  //  -29.63 dB
    3.32086049e-2,  //  -29.57 dB
    3.34109329e-2,  //  -29.52 dB
    3.36144976e-2,  //  -29.47 dB
    3.38193029e-2,  //  -29.42 dB
    3.40253524e-2,  //  -29.36 dB
    3.42326611e-2,  //  -29.31 dB
    3.44412290e-2,  //  -29.26 dB
    3.46510708e-2,  //  -29.21 dB
    3.48621905e-2,  //  -29.15 dB
    3.50745954e-2,  //  -29.10 dB
    3.52882966e-2,  //  -29.05 dB
    3.55032980e-2,  //  -28.99 dB
    3.57196070e-2,  //  -28.94 dB
    3.59372385e-2,  //  -28.89 dB
    3.61561924e-2,  //  -28.84 dB
    3.63764837e-2,  //  -28.78 dB
    3.65981162e-2,  //  -28.73 dB
    3.68210971e-2,  //  -28.68 dB
    3.70454378e-2,  //  -28.63 dB
    3.72711457e-2,  //  -28.57 dB
    3.74982283e-2,  //  -28.52 dB
    3.77266929e-2,  //  -28.47 dB
    3.79565544e-2,  //  -28.41 dB
    3.81878130e-2,  //  -28.36 dB
    3.84204797e-2,  //  -28.31 dB
    3.86545658e-2,  //  -28.26 dB
    3.88900749e-2,  //  -28.20 dB
    3.91270220e-2,  //  -28.15 dB
    3.93654108e-2,  //  -28.10 dB
    3.96052562e-2,  //  -28.04 dB
    3.98465581e-2,  //  -27.99 dB
    4.00893316e-2,  //  -27.94 dB
    4.03335840e-2,  //  -27.89 dB
    4.05793265e-2,  //  -27.83 dB
    4.08265665e-2,  //  -27.78 dB
    4.10753116e-2,  //  -27.73 dB
    4.13255692e-2,  //  -27.68 dB
    4.15773541e-2,  //  -27.62 dB
    4.18306738e-2,  //  -27.57 dB
    4.20855358e-2,  //  -27.52 dB
    4.23419513e-2,  //  -27.46 dB
    4.25999314e-2,  //  -27.41 dB
    4.28594798e-2,  //  -27.36 dB
    4.31206115e-2,  //  -27.31 dB
    4.33833338e-2,  //  -27.25 dB
    4.36476544e-2,  //  -27.20 dB
    4.39135879e-2,  //  -27.15 dB
    4.41811420e-2,  //  -27.10 dB
    4.44503240e-2,  //  -27.04 dB
    4.47211489e-2,  //  -26.99 dB
    4.49936204e-2,  //  -26.94 dB
    4.52677570e-2,  //  -26.88 dB
    4.55435589e-2,  //  -26.83 dB
    4.58210446e-2,  //  -26.78 dB
    4.61002178e-2,  //  -26.73 dB
    4.63810936e-2,  //  -26.67 dB
    4.66636792e-2,  //  -26.62 dB
    4.69479896e-2,  //  -26.57 dB
    4.72340323e-2,  //  -26.51 dB
    4.75218147e-2,  //  -26.46 dB
    4.78113517e-2,  //  -26.41 dB
    4.81026545e-2,  //  -26.36 dB
    4.83957306e-2,  //  -26.30 dB
    4.86905910e-2,  //  -26.25 dB
    4.89872470e-2,  //  -26.20 dB
    4.92857136e-2,  //  -26.15 dB
    4.95859981e-2,  //  -26.09 dB
    4.98881117e-2,  //  -26.04 dB
    5.01920655e-2,  //  -25.99 dB
    5.04978709e-2,  //  -25.93 dB
    5.08055426e-2,  //  -25.88 dB
    5.11150844e-2,  //  -25.83 dB
    5.14265150e-2,  //  -25.78 dB
    5.17398417e-2,  //  -25.72 dB
    5.20550795e-2,  //  -25.67 dB
    5.23722358e-2,  //  -25.62 dB
    5.26913255e-2,  //  -25.57 dB
    5.30123599e-2,  //  -25.51 dB
    5.33353500e-2,  //  -25.46 dB
    5.36603071e-2,  //  -25.41 dB
    5.39872423e-2,  //  -25.35 dB
    5.43161742e-2,  //  -25.30 dB
    5.46471067e-2,  //  -25.25 dB
    5.49800545e-2,  //  -25.20 dB
    5.53150326e-2,  //  -25.14 dB
    5.56520522e-2,  //  -25.09 dB
    5.59911244e-2,  //  -25.04 dB
    5.63322641e-2,  //  -24.98 dB
    5.66754825e-2,  //  -24.93 dB
    5.70207871e-2,  //  -24.88 dB
    5.73682003e-2,  //  -24.83 dB
    5.77177294e-2,  //  -24.77 dB
    5.80693856e-2,  //  -24.72 dB
    5.84231876e-2,  //  -24.67 dB
    5.87791428e-2,  //  -24.62 dB
    5.91372699e-2,  //  -24.56 dB
    5.94975762e-2,  //  -24.51 dB
    5.98600768e-2,  //  -24.46 dB
    6.02247864e-2,  //  -24.40 dB
    6.05917200e-2,  //  -24.35 dB
    6.09608889e-2,  //  -24.30 dB
    6.13323078e-2,  //  -24.25 dB
    6.17059879e-2,  //  -24.19 dB
    6.20819442e-2,  //  -24.14 dB
    6.24601915e-2,  //  -24.09 dB
    6.28407449e-2,  //  -24.04 dB
    6.32236153e-2,  //  -23.98 dB
    6.36088178e-2,  //  -23.93 dB
    6.39963746e-2,  //  -23.88 dB
    6.43862858e-2,  //  -23.82 dB
    6.47785738e-2,  //  -23.77 dB
    6.51732460e-2,  //  -23.72 dB
    6.55703321e-2,  //  -23.67 dB
    6.59698322e-2,  //  -23.61 dB
    6.63717687e-2,  //  -23.56 dB
    6.67761564e-2,  //  -23.51 dB
    6.71830028e-2,  //  -23.45 dB
    6.75923303e-2,  //  -23.40 dB
    6.80041537e-2,  //  -23.35 dB
    6.84184805e-2,  //  -23.30 dB
    6.88353330e-2,  //  -23.24 dB
    6.92547262e-2,  //  -23.19 dB
    6.96766824e-2,  //  -23.14 dB
    7.01012015e-2,  //  -23.09 dB
    7.05283061e-2,  //  -23.03 dB
    7.09580183e-2,  //  -22.98 dB
    7.13903457e-2,  //  -22.93 dB
    7.18253031e-2,  //  -22.87 dB
    7.22629130e-2,  //  -22.82 dB
    7.27031976e-2,  //  -22.77 dB
    7.31461570e-2,  //  -22.72 dB
    7.35918134e-2,  //  -22.66 dB
    7.40401894e-2,  //  -22.61 dB
    7.44912922e-2,  //  -22.56 dB
    7.49451518e-2,  //  -22.51 dB
    7.54017681e-2,  //  -22.45 dB
    7.58611709e-2,  //  -22.40 dB
    7.63233751e-2,  //  -22.35 dB
    7.67883882e-2,  //  -22.29 dB
    7.72562400e-2,  //  -22.24 dB
    7.77269378e-2,  //  -22.19 dB
    7.82005116e-2,  //  -22.14 dB
    7.86769614e-2,  //  -22.08 dB
    7.91563168e-2,  //  -22.03 dB
    7.96385929e-2,  //  -21.98 dB
    8.01238120e-2,  //  -21.92 dB
    8.06119815e-2,  //  -21.87 dB
    8.11031312e-2,  //  -21.82 dB
    8.15972686e-2,  //  -21.77 dB
    8.20944160e-2,  //  -21.71 dB
    8.25945958e-2,  //  -21.66 dB
    8.30978230e-2,  //  -21.61 dB
    8.36041123e-2,  //  -21.56 dB
    8.41134936e-2,  //  -21.50 dB
    8.46259743e-2,  //  -21.45 dB
    8.51415768e-2,  //  -21.40 dB
    8.56603161e-2,  //  -21.34 dB
    8.61822218e-2,  //  -21.29 dB
    8.67073089e-2,  //  -21.24 dB
    8.72355923e-2,  //  -21.19 dB
    8.77670944e-2,  //  -21.13 dB
    8.83018300e-2,  //  -21.08 dB
    8.88398290e-2,  //  -21.03 dB
    8.93811062e-2,  //  -20.98 dB
    8.99256840e-2,  //  -20.92 dB
    9.04735699e-2,  //  -20.87 dB
    9.10248011e-2,  //  -20.82 dB
    9.15793926e-2,  //  -20.76 dB
    9.21373591e-2,  //  -20.71 dB
    9.26987231e-2,  //  -20.66 dB
    9.32635143e-2,  //  -20.61 dB
    9.38317403e-2,  //  -20.55 dB
    9.44034308e-2,  //  -20.50 dB
    9.49786082e-2,  //  -20.45 dB
    9.55572873e-2,  //  -20.39 dB
    9.61394906e-2,  //  -20.34 dB
    9.67252403e-2,  //  -20.29 dB
    9.73145589e-2,  //  -20.24 dB
    9.79074687e-2,  //  -20.18 dB
    9.85039920e-2,  //  -20.13 dB
    9.91041511e-2,  //  -20.08 dB
    9.97079611e-2,  //  -20.03 dB
    1.00315459e-1,  //  -19.97 dB
    1.00926653e-1,  //  -19.92 dB
    1.01541571e-1,  //  -19.87 dB
    1.02160230e-1,  //  -19.81 dB
    1.02782667e-1,  //  -19.76 dB
    1.03408895e-1,  //  -19.71 dB
    1.04038931e-1,  //  -19.66 dB
    1.04672812e-1,  //  -19.60 dB
    1.05310559e-1,  //  -19.55 dB
    1.05952188e-1,  //  -19.50 dB
    1.06597722e-1,  //  -19.45 dB
    1.07247189e-1,  //  -19.39 dB
    1.07900620e-1,  //  -19.34 dB
    1.08558029e-1,  //  -19.29 dB
    1.09219439e-1,  //  -19.23 dB
    1.09884888e-1,  //  -19.18 dB
    1.10554382e-1,  //  -19.13 dB
    1.11227959e-1,  //  -19.08 dB
    1.11905642e-1,  //  -19.02 dB
    1.12587452e-1,  //  -18.97 dB
    1.13273412e-1,  //  -18.92 dB
    1.13963559e-1,  //  -18.86 dB
    1.14657909e-1,  //  -18.81 dB
    1.15356483e-1,  //  -18.76 dB
    1.16059318e-1,  //  -18.71 dB
    1.16766438e-1,  //  -18.65 dB
    1.17477864e-1,  //  -18.60 dB
    1.18193619e-1,  //  -18.55 dB
    1.18913740e-1,  //  -18.50 dB
    1.19638249e-1,  //  -18.44 dB
    1.20367169e-1,  //  -18.39 dB
    1.21100537e-1,  //  -18.34 dB
    1.21838368e-1,  //  -18.28 dB
    1.22580692e-1,  //  -18.23 dB
    1.23327546e-1,  //  -18.18 dB
    1.24078944e-1,  //  -18.13 dB
    1.24834925e-1,  //  -18.07 dB
    1.25595510e-1,  //  -18.02 dB
    1.26360729e-1,  //  -17.97 dB
    1.27130613e-1,  //  -17.91 dB
    1.27905175e-1,  //  -17.86 dB
    1.28684476e-1,  //  -17.81 dB
    1.29468501e-1,  //  -17.76 dB
    1.30257323e-1,  //  -17.70 dB
    1.31050944e-1,  //  -17.65 dB
    1.31849408e-1,  //  -17.60 dB
    1.32652730e-1,  //  -17.55 dB
    1.33460939e-1,  //  -17.49 dB
    1.34274080e-1,  //  -17.44 dB
    1.35092169e-1,  //  -17.39 dB
    1.35915250e-1,  //  -17.33 dB
    1.36743352e-1,  //  -17.28 dB
    1.37576491e-1,  //  -17.23 dB
    1.38414696e-1,  //  -17.18 dB
    1.39258027e-1,  //  -17.12 dB
    1.40106484e-1,  //  -17.07 dB
    1.40960112e-1,  //  -17.02 dB
    1.41818941e-1,  //  -16.97 dB
    1.42682999e-1,  //  -16.91 dB
    1.43552333e-1,  //  -16.86 dB
    1.44426957e-1,  //  -16.81 dB
    1.45306915e-1,  //  -16.75 dB
    1.46192223e-1,  //  -16.70 dB
    1.47082940e-1,  //  -16.65 dB
    1.47979066e-1,  //  -16.60 dB
    1.48880661e-1,  //  -16.54 dB
    1.49787754e-1,  //  -16.49 dB
    1.50700375e-1,  //  -16.44 dB
    1.51618540e-1,  //  -16.38 dB
    1.52542308e-1,  //  -16.33 dB
    1.53471708e-1,  //  -16.28 dB
    1.54406771e-1,  //  -16.23 dB
    1.55347526e-1,  //  -16.17 dB
    1.56294018e-1,  //  -16.12 dB
    1.57246277e-1,  //  -16.07 dB
    1.58204332e-1,  //  -16.02 dB
    1.59168229e-1,  //  -15.96 dB
    1.60137996e-1,  //  -15.91 dB
    1.61113665e-1,  //  -15.86 dB
    1.62095293e-1,  //  -15.80 dB
    1.63082898e-1,  //  -15.75 dB
    1.64076507e-1,  //  -15.70 dB
    1.65076181e-1,  //  -15.65 dB
    1.66081950e-1,  //  -15.59 dB
    1.67093843e-1,  //  -15.54 dB
    1.68111891e-1,  //  -15.49 dB
    1.69136152e-1,  //  -15.44 dB
    1.70166656e-1,  //  -15.38 dB
    1.71203434e-1,  //  -15.33 dB
    1.72246516e-1,  //  -15.28 dB
    1.73295975e-1,  //  -15.22 dB
    1.74351811e-1,  //  -15.17 dB
    1.75414100e-1,  //  -15.12 dB
    1.76482841e-1,  //  -15.07 dB
    1.77558109e-1,  //  -15.01 dB
    1.78639919e-1,  //  -14.96 dB
    1.79728314e-1,  //  -14.91 dB
    1.80823356e-1,  //  -14.85 dB
    1.81925058e-1,  //  -14.80 dB
    1.83033481e-1,  //  -14.75 dB
    1.84148654e-1,  //  -14.70 dB
    1.85270622e-1,  //  -14.64 dB
    1.86399415e-1,  //  -14.59 dB
    1.87535092e-1,  //  -14.54 dB
    1.88677698e-1,  //  -14.49 dB
    1.89827263e-1,  //  -14.43 dB
    1.90983817e-1,  //  -14.38 dB
    1.92147434e-1,  //  -14.33 dB
    1.93318129e-1,  //  -14.27 dB
    1.94495961e-1,  //  -14.22 dB
    1.95680976e-1,  //  -14.17 dB
    1.96873203e-1,  //  -14.12 dB
    1.98072702e-1,  //  -14.06 dB
    1.99279502e-1,  //  -14.01 dB
    2.00493649e-1,  //  -13.96 dB
    2.01715201e-1,  //  -13.91 dB
    2.02944204e-1,  //  -13.85 dB
    2.04180688e-1,  //  -13.80 dB
    2.05424696e-1,  //  -13.75 dB
    2.06676289e-1,  //  -13.69 dB
    2.07935512e-1,  //  -13.64 dB
    2.09202409e-1,  //  -13.59 dB
    2.10477024e-1,  //  -13.54 dB
    2.11759403e-1,  //  -13.48 dB
    2.13049591e-1,  //  -13.43 dB
    2.14347646e-1,  //  -13.38 dB
    2.15653598e-1,  //  -13.32 dB
    2.16967523e-1,  //  -13.27 dB
    2.18289435e-1,  //  -13.22 dB
    2.19619423e-1,  //  -13.17 dB
    2.20957503e-1,  //  -13.11 dB
    2.22303733e-1,  //  -13.06 dB
    2.23658159e-1,  //  -13.01 dB
    2.25020856e-1,  //  -12.96 dB
    2.26391837e-1,  //  -12.90 dB
    2.27771178e-1,  //  -12.85 dB
    2.29158923e-1,  //  -12.80 dB
    2.30555132e-1,  //  -12.74 dB
    2.31959835e-1,  //  -12.69 dB
    2.33373106e-1,  //  -12.64 dB
    2.34794989e-1,  //  -12.59 dB
    2.36225531e-1,  //  -12.53 dB
    2.37664774e-1,  //  -12.48 dB
    2.39112809e-1,  //  -12.43 dB
    2.40569651e-1,  //  -12.38 dB
    2.42035374e-1,  //  -12.32 dB
    2.43510023e-1,  //  -12.27 dB
    2.44993672e-1,  //  -12.22 dB
    2.46486351e-1,  //  -12.16 dB
    2.47988120e-1,  //  -12.11 dB
    2.49499038e-1,  //  -12.06 dB
    2.51019180e-1,  //  -12.01 dB
    2.52548546e-1,  //  -11.95 dB
    2.54087269e-1,  //  -11.90 dB
    2.55635351e-1,  //  -11.85 dB
    2.57192850e-1,  //  -11.79 dB
    2.58759856e-1,  //  -11.74 dB
    2.60336429e-1,  //  -11.69 dB
    2.61922568e-1,  //  -11.64 dB
    2.63518393e-1,  //  -11.58 dB
    2.65123934e-1,  //  -11.53 dB
    2.66739279e-1,  //  -11.48 dB
    2.68364429e-1,  //  -11.43 dB
    2.69999504e-1,  //  -11.37 dB
    2.71644533e-1,  //  -11.32 dB
    2.73299605e-1,  //  -11.27 dB
    2.74964720e-1,  //  -11.21 dB
    2.76640028e-1,  //  -11.16 dB
    2.78325498e-1,  //  -11.11 dB
    2.80021250e-1,  //  -11.06 dB
    2.81727344e-1,  //  -11.00 dB
    2.83443838e-1,  //  -10.95 dB
    2.85170794e-1,  //  -10.90 dB
    2.86908239e-1,  //  -10.85 dB
    2.88656294e-1,  //  -10.79 dB
    2.90415019e-1,  //  -10.74 dB
    2.92184412e-1,  //  -10.69 dB
    2.93964624e-1,  //  -10.63 dB
    2.95755655e-1,  //  -10.58 dB
    2.97557622e-1,  //  -10.53 dB
    2.99370557e-1,  //  -10.48 dB
    3.01194549e-1,  //  -10.42 dB
    3.03029627e-1,  //  -10.37 dB
    3.04875910e-1,  //  -10.32 dB
    3.06733429e-1,  //  -10.26 dB
    3.08602273e-1,  //  -10.21 dB
    3.10482502e-1,  //  -10.16 dB
    3.12374175e-1,  //  -10.11 dB
    3.14277381e-1,  //  -10.05 dB
    3.16192210e-1,  //  -10.00 dB
    3.18118662e-1,  //   -9.95 dB
    3.20056885e-1,  //   -9.90 dB
    3.22006881e-1,  //   -9.84 dB
    3.23968798e-1,  //   -9.79 dB
    3.25942636e-1,  //   -9.74 dB
    3.27928513e-1,  //   -9.68 dB
    3.29926491e-1,  //   -9.63 dB
    3.31936657e-1,  //   -9.58 dB
    3.33959043e-1,  //   -9.53 dB
    3.35993767e-1,  //   -9.47 dB
    3.38040888e-1,  //   -9.42 dB
    3.40100467e-1,  //   -9.37 dB
    3.42172593e-1,  //   -9.32 dB
    3.44257355e-1,  //   -9.26 dB
    3.46354842e-1,  //   -9.21 dB
    3.48465085e-1,  //   -9.16 dB
    3.50588173e-1,  //   -9.10 dB
    3.52724224e-1,  //   -9.05 dB
    3.54873270e-1,  //   -9.00 dB
    3.57035398e-1,  //   -8.95 dB
    3.59210730e-1,  //   -8.89 dB
    3.61399293e-1,  //   -8.84 dB
    3.63601208e-1,  //   -8.79 dB
    3.65816504e-1,  //   -8.73 dB
    3.68045330e-1,  //   -8.68 dB
    3.70287746e-1,  //   -8.63 dB
    3.72543782e-1,  //   -8.58 dB
    3.74813586e-1,  //   -8.52 dB
    3.77097219e-1,  //   -8.47 dB
    3.79394770e-1,  //   -8.42 dB
    3.81706327e-1,  //   -8.37 dB
    3.84031951e-1,  //   -8.31 dB
    3.86371762e-1,  //   -8.26 dB
    3.88725817e-1,  //   -8.21 dB
    3.91094208e-1,  //   -8.15 dB
    3.93477052e-1,  //   -8.10 dB
    3.95874381e-1,  //   -8.05 dB
    3.98286343e-1,  //   -8.00 dB
    4.00712997e-1,  //   -7.94 dB
    4.03154403e-1,  //   -7.89 dB
    4.05610710e-1,  //   -7.84 dB
    4.08082008e-1,  //   -7.79 dB
    4.10568327e-1,  //   -7.73 dB
    4.13069814e-1,  //   -7.68 dB
    4.15586531e-1,  //   -7.63 dB
    4.18118566e-1,  //   -7.57 dB
    4.20666069e-1,  //   -7.52 dB
    4.23229069e-1,  //   -7.47 dB
    4.25807685e-1,  //   -7.42 dB
    4.28402007e-1,  //   -7.36 dB
    4.31012124e-1,  //   -7.31 dB
    4.33638185e-1,  //   -7.26 dB
    4.36280221e-1,  //   -7.20 dB
    4.38938349e-1,  //   -7.15 dB
    4.41612661e-1,  //   -7.10 dB
    4.44303304e-1,  //   -7.05 dB
    4.47010309e-1,  //   -6.99 dB
    4.49733824e-1,  //   -6.94 dB
    4.52473909e-1,  //   -6.89 dB
    4.55230713e-1,  //   -6.84 dB
    4.58004296e-1,  //   -6.78 dB
    4.60794806e-1,  //   -6.73 dB
    4.63602304e-1,  //   -6.68 dB
    4.66426909e-1,  //   -6.62 dB
    4.69268709e-1,  //   -6.57 dB
    4.72127825e-1,  //   -6.52 dB
    4.75004375e-1,  //   -6.47 dB
    4.77898449e-1,  //   -6.41 dB
    4.80810136e-1,  //   -6.36 dB
    4.83739585e-1,  //   -6.31 dB
    4.86686885e-1,  //   -6.26 dB
    4.89652127e-1,  //   -6.20 dB
    4.92635429e-1,  //   -6.15 dB
    4.95636940e-1,  //   -6.10 dB
    4.98656690e-1,  //   -6.04 dB
    5.01694858e-1,  //   -5.99 dB
    5.04751563e-1,  //   -5.94 dB
    5.07826865e-1,  //   -5.89 dB
    5.10920942e-1,  //   -5.83 dB
    5.14033794e-1,  //   -5.78 dB
    5.17165661e-1,  //   -5.73 dB
    5.20316660e-1,  //   -5.67 dB
    5.23486793e-1,  //   -5.62 dB
    5.26676238e-1,  //   -5.57 dB
    5.29885113e-1,  //   -5.52 dB
    5.33113539e-1,  //   -5.46 dB
    5.36361694e-1,  //   -5.41 dB
    5.39629579e-1,  //   -5.36 dB
    5.42917371e-1,  //   -5.31 dB
    5.46225250e-1,  //   -5.25 dB
    5.49553216e-1,  //   -5.20 dB
    5.52901506e-1,  //   -5.15 dB
    5.56270182e-1,  //   -5.09 dB
    5.59659362e-1,  //   -5.04 dB
    5.63069224e-1,  //   -4.99 dB
    5.66499829e-1,  //   -4.94 dB
    5.69951355e-1,  //   -4.88 dB
    5.73423922e-1,  //   -4.83 dB
    5.76917648e-1,  //   -4.78 dB
    5.80432653e-1,  //   -4.72 dB
    5.83969057e-1,  //   -4.67 dB
    5.87527037e-1,  //   -4.62 dB
    5.91106653e-1,  //   -4.57 dB
    5.94708085e-1,  //   -4.51 dB
    5.98331511e-1,  //   -4.46 dB
    6.01976991e-1,  //   -4.41 dB
    6.05644643e-1,  //   -4.36 dB
    6.09334648e-1,  //   -4.30 dB
    6.13047183e-1,  //   -4.25 dB
    6.16782308e-1,  //   -4.20 dB
    6.20540202e-1,  //   -4.14 dB
    6.24320984e-1,  //   -4.09 dB
    6.28124774e-1,  //   -4.04 dB
    6.31951749e-1,  //   -3.99 dB
    6.35802090e-1,  //   -3.93 dB
    6.39675856e-1,  //   -3.88 dB
    6.43573225e-1,  //   -3.83 dB
    6.47494316e-1,  //   -3.78 dB
    6.51439309e-1,  //   -3.72 dB
    6.55408323e-1,  //   -3.67 dB
    6.59401596e-1,  //   -3.62 dB
    6.63419127e-1,  //   -3.56 dB
    6.67461157e-1,  //   -3.51 dB
    6.71527803e-1,  //   -3.46 dB
    6.75619245e-1,  //   -3.41 dB
    6.79735601e-1,  //   -3.35 dB
    6.83877051e-1,  //   -3.30 dB
    6.88043714e-1,  //   -3.25 dB
    6.92235768e-1,  //   -3.19 dB
    6.96453333e-1,  //   -3.14 dB
    7.00696647e-1,  //   -3.09 dB
    7.04965830e-1,  //   -3.04 dB
    7.09260941e-1,  //   -2.98 dB
    7.13582277e-1,  //   -2.93 dB
    7.17929959e-1,  //   -2.88 dB
    7.22304106e-1,  //   -2.83 dB
    7.26704895e-1,  //   -2.77 dB
    7.31132507e-1,  //   -2.72 dB
    7.35587120e-1,  //   -2.67 dB
    7.40068793e-1,  //   -2.61 dB
    7.44577825e-1,  //   -2.56 dB
    7.49114335e-1,  //   -2.51 dB
    7.53678501e-1,  //   -2.46 dB
    7.58270442e-1,  //   -2.40 dB
    7.62890399e-1,  //   -2.35 dB
    7.67538488e-1,  //   -2.30 dB
    7.72214830e-1,  //   -2.25 dB
    7.76919723e-1,  //   -2.19 dB
    7.81653285e-1,  //   -2.14 dB
    7.86415696e-1,  //   -2.09 dB
    7.91207135e-1,  //   -2.03 dB
    7.96027720e-1,  //   -1.98 dB
    8.00877690e-1,  //   -1.93 dB
    8.05757225e-1,  //   -1.88 dB
    8.10666442e-1,  //   -1.82 dB
    8.15605640e-1,  //   -1.77 dB
    8.20574880e-1,  //   -1.72 dB
    8.25574398e-1,  //   -1.66 dB
    8.30604434e-1,  //   -1.61 dB
    8.35665047e-1,  //   -1.56 dB
    8.40756536e-1,  //   -1.51 dB
    8.45879018e-1,  //   -1.45 dB
    8.51032734e-1,  //   -1.40 dB
    8.56217861e-1,  //   -1.35 dB
    8.61434519e-1,  //   -1.30 dB
    8.66683006e-1,  //   -1.24 dB
    8.71963441e-1,  //   -1.19 dB
    8.77276123e-1,  //   -1.14 dB
    8.82621109e-1,  //   -1.08 dB
    8.87998641e-1,  //   -1.03 dB
    8.93409014e-1,  //   -0.98 dB
    8.98852289e-1,  //   -0.93 dB
    9.04328763e-1,  //   -0.87 dB
    9.09838557e-1,  //   -0.82 dB
    9.15381968e-1,  //   -0.77 dB
    9.20959115e-1,  //   -0.72 dB
    9.26570237e-1,  //   -0.66 dB
    9.32215571e-1,  //   -0.61 dB
    9.37895298e-1,  //   -0.56 dB
    9.43609655e-1,  //   -0.50 dB
    9.49358821e-1,  //   -0.45 dB
    9.55142975e-1,  //   -0.40 dB
    9.60962415e-1,  //   -0.35 dB
    9.66817260e-1,  //   -0.29 dB
    9.72707808e-1,  //   -0.24 dB
    9.78634298e-1,  //   -0.19 dB
    9.84596789e-1,  //   -0.13 dB
    9.90595698e-1,  //   -0.08 dB
    9.96631086e-1,  //   -0.03 dB
    1.00270331e0,   //    0.02 dB
    1.00881255e0,   //    0.08 dB
    1.01495886e0,   //    0.13 dB
    1.02114272e0,   //    0.18 dB
    1.02736425e0,   //    0.23 dB
    1.03362370e0,   //    0.29 dB
    1.03992128e0,   //    0.34 dB
    1.04625726e0,   //    0.39 dB
    1.05263186e0,   //    0.45 dB
    1.05904520e0,   //    0.50 dB
    1.06549776e0,   //    0.55 dB
    1.07198954e0,   //    0.60 dB
    1.07852077e0,   //    0.66 dB
    1.08509195e0,   //    0.71 dB
    1.09170306e0,   //    0.76 dB
    1.09835458e0,   //    0.81 dB
    1.10504651e0,   //    0.87 dB
    1.11177921e0,   //    0.92 dB
    1.11855304e0,   //    0.97 dB
    1.12536800e0,   //    1.03 dB
    1.13222456e0,   //    1.08 dB
    1.13912296e0,   //    1.13 dB
    1.14606333e0,   //    1.18 dB
    1.15304589e0,   //    1.24 dB
    1.16007113e0,   //    1.29 dB
    1.16713905e0,   //    1.34 dB
    1.17425013e0,   //    1.40 dB
    1.18140447e0,   //    1.45 dB
    1.18860245e0,   //    1.50 dB
    1.19584429e0,   //    1.55 dB
    1.20313025e0,   //    1.61 dB
    1.21046066e0,   //    1.66 dB
    1.21783555e0,   //    1.71 dB
    1.22525549e0,   //    1.76 dB
    1.23272073e0,   //    1.82 dB
    1.24023128e0,   //    1.87 dB
    1.24778771e0,   //    1.92 dB
    1.25539005e0,   //    1.98 dB
    1.26303887e0,   //    2.03 dB
    1.27073419e0,   //    2.08 dB
    1.27847636e0,   //    2.13 dB
    1.28626585e0,   //    2.19 dB
    1.29410267e0,   //    2.24 dB
    1.30198729e0,   //    2.29 dB
    1.30991995e0,   //    2.34 dB
    1.31790090e0,   //    2.40 dB
    1.32593048e0,   //    2.45 dB
    1.33400905e0,   //    2.50 dB
    1.34213674e0,   //    2.56 dB
    1.35031402e0,   //    2.61 dB
    1.35854113e0,   //    2.66 dB
    1.36681831e0,   //    2.71 dB
    1.37514603e0,   //    2.77 dB
    1.38352442e0,   //    2.82 dB
    1.39195383e0,   //    2.87 dB
    1.40043461e0,   //    2.93 dB
    1.40896702e0,   //    2.98 dB
    1.41755152e0,   //    3.03 dB
    1.42618823e0,   //    3.08 dB
    1.43487763e0,   //    3.14 dB
    1.44361985e0,   //    3.19 dB
    1.45241547e0,   //    3.24 dB
    1.46126461e0,   //    3.29 dB
    1.47016776e0,   //    3.35 dB
    1.47912502e0,   //    3.40 dB
    1.48813689e0,   //    3.45 dB
    1.49720371e0,   //    3.51 dB
    1.50632572e0,   //    3.56 dB
    1.51550341e0,   //    3.61 dB
    1.52473688e0,   //    3.66 dB
    1.53402674e0,   //    3.72 dB
    1.54337311e0,   //    3.77 dB
    1.55277646e0,   //    3.82 dB
    1.56223714e0,   //    3.87 dB
    1.57175541e0,   //    3.93 dB
    1.58133161e0,   //    3.98 dB
    1.59096622e0,   //    4.03 dB
    1.60065961e0,   //    4.09 dB
    1.61041188e0,   //    4.14 dB
    1.62022376e0,   //    4.19 dB
    1.63009524e0,   //    4.24 dB
    1.64002705e0,   //    4.30 dB
    1.65001929e0,   //    4.35 dB
    1.66007233e0,   //    4.40 dB
    1.67018676e0,   //    4.46 dB
    1.68036270e0,   //    4.51 dB
    1.69060063e0,   //    4.56 dB
    1.70090103e0,   //    4.61 dB
    1.71126413e0,   //    4.67 dB
    1.72169042e0,   //    4.72 dB
    1.73218012e0,   //    4.77 dB
    1.74273384e0,   //    4.82 dB
    1.75335181e0,   //    4.88 dB
    1.76403451e0,   //    4.93 dB
    1.77478230e0,   //    4.98 dB
    1.78559554e0,   //    5.04 dB
    1.79647470e0,   //    5.09 dB
    1.80742013e0,   //    5.14 dB
    1.81843221e0,   //    5.19 dB
    1.82951140e0,   //    5.25 dB
    1.84065807e0,   //    5.30 dB
    1.85187268e0,   //    5.35 dB
    1.86315572e0,   //    5.40 dB
    1.87450743e0,   //    5.46 dB
    1.88592827e0,   //    5.51 dB
    1.89741862e0,   //    5.56 dB
    1.90897906e0,   //    5.62 dB
    1.92060995e0,   //    5.67 dB
    1.93231165e0,   //    5.72 dB
    1.94408476e0,   //    5.77 dB
    1.95592952e0,   //    5.83 dB
    1.96784639e0,   //    5.88 dB
    1.97983599e0,   //    5.93 dB
    1.99189854e0,   //    5.99 dB
    2.00403476e0,   //    6.04 dB
    2.01624465e0,   //    6.09 dB
    2.02852917e0,   //    6.14 dB
    2.04088831e0,   //    6.20 dB
    2.05332303e0,   //    6.25 dB
    2.06583333e0,   //    6.30 dB
    2.07841969e0,   //    6.35 dB
    2.09108305e0,   //    6.41 dB
    2.10382342e0,   //    6.46 dB
    2.11664152e0,   //    6.51 dB
    2.12953758e0,   //    6.57 dB
    2.14251208e0,   //    6.62 dB
    2.15556598e0,   //    6.67 dB
    2.16869926e0,   //    6.72 dB
    2.18191242e0,   //    6.78 dB
    2.19520617e0,   //    6.83 dB
    2.20858097e0,   //    6.88 dB
    2.22203732e0,   //    6.94 dB
    2.23557544e0,   //    6.99 dB
    2.24919629e0,   //    7.04 dB
    2.26290011e0,   //    7.09 dB
    2.27668715e0,   //    7.15 dB
    2.29055834e0,   //    7.20 dB
    2.30451417e0,   //    7.25 dB
    2.31855488e0,   //    7.30 dB
    2.33268118e0,   //    7.36 dB
    2.34689355e0,   //    7.41 dB
    2.36119270e0,   //    7.46 dB
    2.37557864e0,   //    7.52 dB
    2.39005232e0,   //    7.57 dB
    2.40461445e0,   //    7.62 dB
    2.41926503e0,   //    7.67 dB
    2.43400478e0,   //    7.73 dB
    2.44883466e0,   //    7.78 dB
    2.46375465e0,   //    7.83 dB
    2.47876573e0,   //    7.88 dB
    2.49386811e0,   //    7.94 dB
    2.50906253e0,   //    7.99 dB
    2.52434945e0,   //    8.04 dB
    2.53972960e0,   //    8.10 dB
    2.55520344e0,   //    8.15 dB
    2.57077169e0,   //    8.20 dB
    2.58643460e0,   //    8.25 dB
    2.60219312e0,   //    8.31 dB
    2.61804748e0,   //    8.36 dB
    2.63399863e0,   //    8.41 dB
    2.65004683e0,   //    8.47 dB
    2.66619277e0,   //    8.52 dB
    2.68243718e0,   //    8.57 dB
    2.69878054e0,   //    8.62 dB
    2.71522331e0,   //    8.68 dB
    2.73176646e0,   //    8.73 dB
    2.74841046e0,   //    8.78 dB
    2.76515579e0,   //    8.83 dB
    2.78200293e0,   //    8.89 dB
    2.79895306e0,   //    8.94 dB
    2.81600618e0,   //    8.99 dB
    2.83316326e0,   //    9.05 dB
    2.85042500e0,   //    9.10 dB
    2.86779189e0,   //    9.15 dB
    2.88526464e0,   //    9.20 dB
    2.90284371e0,   //    9.26 dB
    2.92052984e0,   //    9.31 dB
    2.93832374e0,   //    9.36 dB
    2.95622611e0,   //    9.41 dB
    2.97423768e0,   //    9.47 dB
    2.99235892e0,   //    9.52 dB
    3.01059055e0,   //    9.57 dB
    3.02893329e0,   //    9.63 dB
    3.04738760e0,   //    9.68 dB
    3.06595445e0,   //    9.73 dB
    3.08463454e0,   //    9.78 dB
    3.10342836e0,   //    9.84 dB
    3.12233663e0,   //    9.89 dB
    3.14136028e0,   //    9.94 dB
    3.16049957e0,   //   10.00 dB
    3.17975569e0,   //   10.05 dB
    3.19912910e0,   //   10.10 dB
    3.21862030e0,   //   10.15 dB
    3.23823047e0,   //   10.21 dB
    3.25796008e0,   //   10.26 dB
    3.27781010e0,   //   10.31 dB
    3.29778075e0,   //   10.36 dB
    3.31787324e0,   //   10.42 dB
    3.33808804e0,   //   10.47 dB
    3.35842609e0,   //   10.52 dB
    3.37888813e0,   //   10.58 dB
    3.39947486e0,   //   10.63 dB
    3.42018676e0,   //   10.68 dB
    3.44102502e0,   //   10.73 dB
    3.46199036e0,   //   10.79 dB
    3.48308325e0,   //   10.84 dB
    3.50430465e0,   //   10.89 dB
    3.52565551e0,   //   10.94 dB
    3.54713631e0,   //   11.00 dB
    3.56874800e0,   //   11.05 dB
    3.59049129e0,   //   11.10 dB
    3.61236715e0,   //   11.16 dB
    3.63437629e0,   //   11.21 dB
    3.65651965e0,   //   11.26 dB
    3.67879772e0,   //   11.31 dB
    3.70121169e0,   //   11.37 dB
    3.72376204e0,   //   11.42 dB
    3.74644995e0,   //   11.47 dB
    3.76927590e0,   //   11.53 dB
    3.79224110e0,   //   11.58 dB
    3.81534624e0,   //   11.63 dB
    3.83859205e0,   //   11.68 dB
    3.86197948e0,   //   11.74 dB
    3.88550949e0,   //   11.79 dB
    3.90918279e0,   //   11.84 dB
    3.93300033e0,   //   11.89 dB
    3.95696306e0,   //   11.95 dB
    3.98107171e0,   //   12.00 dB
];
